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

//! the signal model and per-frame logic of the flight path director (FPD) overlay of the primary
//! flight display. Independently updated, fault annotated sensor words are collected by a
//! [`SignalAggregator`], and on each clock tick the [`UpdateScheduler`] decides if the symbol is shown
//! and, if inputs have changed, where it goes. Rendering is left to a [`RenderSink`].

pub mod errors;
pub mod sensor_word;
pub mod signals;
pub mod aggregator;
pub mod visibility;
pub mod geometry;
pub mod render;
pub mod scheduler;
pub mod config;
pub mod bus;
pub mod replay;

pub use errors::{PfdFlightPathError, Result};
pub use sensor_word::{SensorWord, SignStatus};
pub use signals::{Signal, SignalName};
pub use aggregator::{DisplaySide, FlightPathSnapshot, SignalAggregator};
pub use visibility::{Visibility, VisibilityStateMachine};
pub use geometry::{FlightPathGeometry, FpdTransform, GeometryEngine, HorizonScale, PfdPitchScale};
pub use render::{RenderSink, RecordingSink, SinkCall, TracingSink};
pub use scheduler::{DisplayIntent, UpdateScheduler};
pub use config::{FpdConfig, load_config_path};
pub use bus::{BusEvent, SignalPublisher, SignalSubscriber, signal_bus, run_director};
