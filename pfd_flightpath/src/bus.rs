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

//! async transport from signal publishers to the update scheduler. All events go through a single bounded
//! channel that is drained by one task, i.e. signal updates and ticks are processed strictly in delivery
//! order and never concurrently

use std::{collections::HashMap, future::pending, time::Duration};
use kanal::{bounded_async, AsyncReceiver, AsyncSender};
use tokio::time::{interval, Interval, MissedTickBehavior};
use tracing::{info,warn,debug};
use pfd_common::datetime::EpochMillis;

use crate::{
    errors::{PfdFlightPathError, Result}, 
    geometry::GeometryEngine, render::RenderSink, scheduler::UpdateScheduler, 
    signals::{Signal, SignalName}
};

#[derive(Debug,Clone,Copy,PartialEq)]
pub enum BusEvent {
    Signal(Signal),
    Tick(EpochMillis),
    Shutdown,
}

/// the sending side of the bus. Clone it for each signal source
#[derive(Debug,Clone)]
pub struct SignalPublisher {
    tx: AsyncSender<BusEvent>,
}

impl SignalPublisher {
    pub async fn publish (&self, signal: Signal)->Result<()> {
        self.send( BusEvent::Signal(signal)).await
    }

    pub async fn tick (&self, now: EpochMillis)->Result<()> {
        self.send( BusEvent::Tick(now)).await
    }

    pub async fn shutdown (&self)->Result<()> {
        self.send( BusEvent::Shutdown).await
    }

    pub async fn send (&self, event: BusEvent)->Result<()> {
        self.tx.send( event).await.map_err( |_| PfdFlightPathError::ChannelClosed)
    }

    /// non-blocking send for sources that must not wait. Returns false if the event was dropped
    /// because the bus is full
    pub fn try_send (&self, event: BusEvent)->Result<bool> {
        match self.tx.try_send( event) {
            Ok(true) => Ok(true),
            Ok(false) => {
                warn!("signal bus full, dropped {:?}", event);
                Ok(false)
            }
            Err(_) => Err(PfdFlightPathError::ChannelClosed)
        }
    }

    pub fn is_closed (&self)->bool { self.tx.is_closed() }
}

#[derive(Debug)]
pub struct SignalSubscriber {
    rx: AsyncReceiver<BusEvent>,
}

pub fn signal_bus (bound: usize)->(SignalPublisher,SignalSubscriber) {
    let (tx,rx) = bounded_async::<BusEvent>( bound);
    (SignalPublisher{tx}, SignalSubscriber{rx})
}

/// drops discrete signals that repeat the last value forwarded on the same channel. Continuous
/// channels always pass since every new reading counts as a change
#[derive(Debug,Default)]
pub struct WhenChanged {
    last: HashMap<SignalName,Signal>,
}

impl WhenChanged {
    pub fn new()->Self { WhenChanged { last: HashMap::new() } }

    pub fn pass (&mut self, signal: &Signal)->bool {
        if !signal.is_discrete() { return true }

        match self.last.insert( signal.name(), *signal) {
            Some(prev) => prev != *signal,
            None => true
        }
    }
}

async fn next_tick (timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => { timer.tick().await; }
        None => pending::<()>().await
    }
}

/// process bus events until we get a `Shutdown` or all publishers are gone. If `tick_interval` is set
/// we also generate our own clock ticks. A final tick (using the time of the last tick, or the wall clock if
/// there was none) is executed before the scheduler is returned so that the sink reflects all received signals
pub async fn run_director<S,G> (mut scheduler: UpdateScheduler<S,G>, subscriber: SignalSubscriber, tick_interval: Option<Duration>)->UpdateScheduler<S,G>
    where S: RenderSink, G: GeometryEngine
{
    let mut timer = tick_interval.map( |dt| {
        let mut timer = interval(dt);
        timer.set_missed_tick_behavior( MissedTickBehavior::Skip);
        timer
    });
    let mut filter = WhenChanged::new();

    info!("flight path director started (display {})", scheduler.aggregator().side().index());

    loop {
        tokio::select! {
            biased;

            event = subscriber.rx.recv() => {
                match event {
                    Ok(BusEvent::Signal(signal)) => {
                        if filter.pass( &signal) { 
                            scheduler.on_signal( signal); 
                        } else {
                            debug!("unchanged {signal} ignored");
                        }
                    }
                    Ok(BusEvent::Tick(now)) => { scheduler.on_tick( now); }
                    Ok(BusEvent::Shutdown) => break,
                    Err(_) => break // all publishers dropped
                }
            }
            _ = next_tick( &mut timer) => {
                scheduler.on_tick( EpochMillis::now());
            }
        }
    }

    // flush on the last seen tick time so that replays end on a recorded timestamp
    let now = scheduler.last_tick().unwrap_or_else( EpochMillis::now);
    scheduler.on_tick( now);
    info!("flight path director terminated after {} ticks", scheduler.n_ticks());
    scheduler
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor_word::SensorWord;

    #[test]
    fn test_when_changed() {
        let mut f = WhenChanged::new();
        assert!( f.pass( &Signal::TrkFpaActive(true)));
        assert!( !f.pass( &Signal::TrkFpaActive(true)));
        assert!( f.pass( &Signal::TrkFpaActive(false)));

        assert!( f.pass( &Signal::ActiveLateralMode(5)));
        assert!( f.pass( &Signal::ActiveVerticalMode(5))); // different channel
        assert!( !f.pass( &Signal::ActiveLateralMode(5)));

        let w = Signal::Roll( SensorWord::normal(1.0));
        assert!( f.pass( &w));
        assert!( f.pass( &w));
    }
}
