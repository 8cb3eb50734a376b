//! Concurrent first access to the process-wide database

use codec_db::{CodecDatabase, CodecDescriptor, CodecVariant, Slot};
use std::sync::Arc;
use tokio::sync::Barrier;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_readers_see_one_database() {
    let tasks = 32;
    let barrier = Arc::new(Barrier::new(tasks));
    let mut handles = Vec::with_capacity(tasks);

    for _ in 0..tasks {
        let barrier = barrier.clone();
        handles.push(tokio::spawn(async move {
            barrier.wait().await;
            let db = codec_db::database();
            let pcmu = db.find_by_signature("PCMU", 8000, 1);
            let offered = CodecDescriptor::new(96, "pcma", 8000, 1);
            (
                db as *const CodecDatabase as usize,
                pcmu,
                db.find_receiver_slot(&offered),
            )
        }));
    }

    let mut results = Vec::with_capacity(tasks);
    for handle in handles {
        results.push(handle.await.unwrap());
    }

    let (address, pcmu, pcma) = results[0];
    assert_ne!(pcmu, Slot::NONE);
    assert_eq!(pcmu, codec_db::slot(CodecVariant::Pcmu));
    assert_eq!(pcma, codec_db::slot(CodecVariant::Pcma));
    assert!(results.iter().all(|result| *result == (address, pcmu, pcma)));
}
