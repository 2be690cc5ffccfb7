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

use serde::Serialize;
use pfd_common::datetime::EpochMillis;

use crate::{
    aggregator::{DisplaySide, SignalAggregator}, 
    config::FpdConfig, errors::Result, 
    geometry::{FlightPathGeometry, FpdTransform, GeometryEngine}, 
    render::RenderSink, signals::Signal, 
    visibility::{Visibility, VisibilityStateMachine}
};

/// what a tick decided. `transform` is only set if the geometry was re-computed in this tick
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct DisplayIntent {
    pub visible: bool,
    pub transform: Option<FpdTransform>,
}

/// the per-frame driver that owns all flight path director state.
/// Signals are only recorded when they arrive; visibility and geometry are computed on clock ticks.
/// The visibility check runs on every tick, the geometry only if we are shown and at least one input
/// changed since the last computation
pub struct UpdateScheduler<S,G=FlightPathGeometry> where S: RenderSink, G: GeometryEngine {
    aggregator: SignalAggregator,
    visibility: VisibilityStateMachine,
    geometry: G,
    sink: S,

    last_tick: Option<EpochMillis>,
    n_ticks: u64,
    n_geometry_updates: u64,
}

impl<S> UpdateScheduler<S,FlightPathGeometry> where S: RenderSink {
    pub fn new (config: &FpdConfig, sink: S)->Result<Self> {
        config.validate()?;
        Ok( UpdateScheduler::with_geometry( config.side()?, config.gate_on_sensor_status, FlightPathGeometry::default(), sink))
    }
}

impl<S,G> UpdateScheduler<S,G> where S: RenderSink, G: GeometryEngine {
    pub fn with_geometry (side: DisplaySide, gate_on_sensor_status: bool, geometry: G, sink: S)->Self {
        UpdateScheduler {
            aggregator: SignalAggregator::new( side),
            visibility: VisibilityStateMachine::new( gate_on_sensor_status),
            geometry,
            sink,
            last_tick: None,
            n_ticks: 0,
            n_geometry_updates: 0,
        }
    }

    /// record a signal. This never computes anything
    pub fn on_signal (&mut self, signal: Signal)->bool {
        self.aggregator.on_signal( signal)
    }

    pub fn on_tick (&mut self, now: EpochMillis)->DisplayIntent {
        self.last_tick = Some(now);
        self.n_ticks += 1;

        let snap = self.aggregator.snapshot();

        if let Some(state) = self.visibility.step( snap) {
            self.sink.set_visible( state.is_shown());
        }

        if self.visibility.state() == Visibility::Shown {
            if self.aggregator.is_dirty() {
                let transform = self.geometry.compute( snap);
                self.sink.set_transform( &transform);
                self.aggregator.take_dirty();
                self.n_geometry_updates += 1;
                DisplayIntent { visible: true, transform: Some(transform) }
            } else {
                DisplayIntent { visible: true, transform: None }
            }
        } else {
            DisplayIntent { visible: false, transform: None }
        }
    }

    pub fn aggregator (&self)->&SignalAggregator { &self.aggregator }
    pub fn visibility (&self)->Visibility { self.visibility.state() }
    pub fn geometry (&self)->&G { &self.geometry }

    pub fn sink (&self)->&S { &self.sink }
    pub fn sink_mut (&mut self)->&mut S { &mut self.sink }
    pub fn into_sink (self)->S { self.sink }

    pub fn last_tick (&self)->Option<EpochMillis> { self.last_tick }
    pub fn n_ticks (&self)->u64 { self.n_ticks }
    pub fn n_geometry_updates (&self)->u64 { self.n_geometry_updates }
}
