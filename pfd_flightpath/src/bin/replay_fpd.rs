/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use pfd_common::define_cli;
use pfd_flightpath::{
    FpdConfig, RecordingSink, UpdateScheduler, load_config_path, signal_bus, run_director,
    replay::read_replay_file
};

define_cli! { ARGS [about="replay a recorded signal log through the flight path director and print the render calls"] =
    config: Option<String> [help="optional RON config file", long],
    display: Option<u8> [help="display index (1 or 2), overrides the config", long],
    input: String [help="signal log with '<epoch-millis> <signal> <payload>' lines"]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .init();

    let mut config = match &ARGS.config {
        Some(path) => load_config_path( path)?,
        None => FpdConfig::default()
    };
    if let Some(idx) = ARGS.display { config.display_index = idx }
    config.tick_interval = None; // replays are only driven by recorded realTime ticks

    let scheduler = UpdateScheduler::new( &config, RecordingSink::new())?;
    let (publisher, subscriber) = signal_bus( config.channel_bound);
    let events = read_replay_file( &ARGS.input)?;

    let feeder = tokio::spawn( async move {
        for event in events {
            publisher.send( event).await?;
        }
        publisher.shutdown().await
    });

    let scheduler = run_director( scheduler, subscriber, None).await;
    feeder.await??;

    eprintln!("{} ticks, {} geometry updates", scheduler.n_ticks(), scheduler.n_geometry_updates());
    for call in &scheduler.sink().calls {
        println!("{}", serde_json::to_string( call)?);
    }
    Ok(())
}
