// Copyright 2026 seqext contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqext::AwaitEachExt;
use seqext_test_utils::ConcurrencyProbe;

#[tokio::test]
async fn test_probe_sees_sequential_mapper_as_non_overlapping() -> anyhow::Result<()> {
    // Arrange
    let probe = ConcurrencyProbe::new();

    // Act
    let results = vec![0usize, 1, 2]
        .await_each(|tag| {
            let probe = probe.clone();
            async move { probe.observe(tag, async move { tag + 1 }).await }
        })
        .await;

    // Assert
    assert_eq!(results, [1, 2, 3]);
    assert_eq!(probe.started(), vec![0, 1, 2]);
    assert_eq!(probe.max_live(), 1);
    Ok(())
}
