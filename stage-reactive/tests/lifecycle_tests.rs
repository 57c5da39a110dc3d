/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use anyhow::Context;
use stage_test::prelude::*;

use crate::setup::actors::gated::Parked;
use crate::setup::actors::storage::storage;
use crate::setup::messages::StorageRequest;
use crate::setup::*;

mod setup;

/// After shutdown the name is free and sends to it find nothing.
#[stage_test]
async fn test_shutdown_removes_actor() -> anyhow::Result<()> {
    initialize_tracing();
    let stage = new_stage();
    let (_, send) = stage
        .register("Storage", 0_i64, storage)
        .context("Storage should register")?;
    assert!(send.send("Storage", StorageRequest::Add(2)).await?.is_some());

    stage.shutdown("Storage");
    assert!(!stage.contains("Storage"));
    assert!(send.send("Storage", StorageRequest::Peek).await?.is_none());
    Ok(())
}

/// Shutting down an absent name, or the same name twice, does nothing.
#[stage_test]
async fn test_shutdown_is_idempotent() -> anyhow::Result<()> {
    initialize_tracing();
    let stage = new_stage();
    stage
        .register("Storage", 0_i64, storage)
        .context("Storage should register")?;
    stage
        .register("Other", 0_i64, storage)
        .context("Other should register")?;

    stage.shutdown("Storage");
    stage.shutdown("Storage");
    stage.shutdown("NeverRegistered");

    assert_eq!(stage.names(), vec!["Other".to_string()]);
    Ok(())
}

/// The surviving capability of a shut-down actor can still reach other actors.
#[stage_test]
async fn test_capability_survives_its_owner() -> anyhow::Result<()> {
    initialize_tracing();
    let stage = new_stage();
    let (_, send_from_gone) = stage
        .register("Gone", 0_i64, storage)
        .context("Gone should register")?;
    stage
        .register("Storage", 0_i64, storage)
        .context("Storage should register")?;

    stage.shutdown("Gone");
    let answer = send_from_gone
        .send_as::<bool>("Storage", StorageRequest::Add(3))
        .await?;
    assert_eq!(answer, Some(true));
    Ok(())
}

/// An invocation in flight when its actor is shut down still answers its caller,
/// but its state commit is dropped.
#[stage_test]
async fn test_in_flight_commit_after_shutdown_is_dropped() -> anyhow::Result<()> {
    initialize_tracing();
    let stage = new_stage();
    let parked = Parked::new();
    let (entered, release) = parked.handles();
    let (_, send) = stage
        .register("Parked", 0_i64, parked)
        .context("Parked should register")?;

    let in_flight = send.tell("Parked", "go");
    entered.notified().await;

    stage.shutdown("Parked");
    release.notify_one();

    let response = in_flight.await??.context("the invocation was already dispatched")?;
    assert_eq!(response.take::<&str>(), Some("finished"));
    assert!(!stage.contains("Parked"));
    Ok(())
}

/// Re-registering a name after shutdown starts fresh, and a commit from the
/// previous incarnation cannot overwrite the new state.
#[stage_test]
async fn test_reregistered_name_ignores_stale_commit() -> anyhow::Result<()> {
    initialize_tracing();
    let stage = new_stage();
    let parked = Parked::new();
    let (entered, release) = parked.handles();
    stage
        .register("Slot", 0_i64, parked)
        .context("first incarnation should register")?;
    let (_, send) = stage
        .register("Caller", 0_i64, storage)
        .context("Caller should register")?;

    let in_flight = send.tell("Slot", "go");
    entered.notified().await;

    stage.shutdown("Slot");
    stage
        .register("Slot", 100_i64, storage)
        .context("second incarnation should register")?;

    release.notify_one();
    assert!(in_flight.await??.is_some());

    assert_eq!(send.send_as::<i64>("Slot", StorageRequest::Peek).await?, Some(100));
    Ok(())
}

/// `shutdown_all` empties the stage.
#[stage_test]
async fn test_shutdown_all() -> anyhow::Result<()> {
    initialize_tracing();
    let stage = new_stage();
    let mut senders = Vec::new();
    for name in ["one", "two", "three"] {
        let (_, send) = stage
            .register(name, 0_i64, storage)
            .context("should register")?;
        senders.push(send);
    }
    assert_eq!(stage.actor_count(), 3);

    stage.shutdown_all();
    assert_eq!(stage.actor_count(), 0);
    for send in &senders {
        assert!(send.send(send.name(), StorageRequest::Peek).await?.is_none());
    }
    Ok(())
}
