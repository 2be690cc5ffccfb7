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

use serde::{Serialize,Deserialize};
use tracing::trace;

use crate::{errors::{PfdFlightPathError, config_error}, sensor_word::SensorWord, signals::Signal};

/// which of the two primary flight displays we are. Each side only follows its own flight director
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum DisplaySide {
    One,
    Two,
}

impl DisplaySide {
    pub fn index (&self)->u8 {
        match self { DisplaySide::One => 1, DisplaySide::Two => 2 }
    }
}

impl TryFrom<u8> for DisplaySide {
    type Error = PfdFlightPathError;

    fn try_from (idx: u8)->Result<Self,Self::Error> {
        match idx {
            1 => Ok(DisplaySide::One),
            2 => Ok(DisplaySide::Two),
            _ => Err( config_error!("invalid display index {} (has to be 1 or 2)", idx))
        }
    }
}

/// the latest known value of every input we track. Fields are updated independently of each other,
/// i.e. a snapshot can (and normally does) hold values of different age
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct FlightPathSnapshot {
    pub roll: SensorWord,
    pub pitch: SensorWord,
    pub track: SensorWord,
    pub heading: SensorWord,
    pub vertical_speed: SensorWord, // ft/min
    pub ground_speed: SensorWord, // kn

    pub active_lateral_mode: i32,
    pub active_vertical_mode: i32,

    pub fd_commanded_pitch_deg: f64,
    pub fd_commanded_roll_deg: f64,

    pub fd_engaged: bool,
    pub trk_fpa_display_active: bool,
}

impl Default for FlightPathSnapshot {
    fn default()->Self {
        FlightPathSnapshot {
            roll: SensorWord::empty(),
            pitch: SensorWord::empty(),
            track: SensorWord::empty(),
            heading: SensorWord::empty(),
            vertical_speed: SensorWord::empty(),
            ground_speed: SensorWord::empty(),
            active_lateral_mode: 0,
            active_vertical_mode: 0,
            fd_commanded_pitch_deg: 0.0,
            fd_commanded_roll_deg: 0.0,
            fd_engaged: true,
            trk_fpa_display_active: false,
        }
    }
}

impl FlightPathSnapshot {
    /// the words the geometry is computed from
    pub fn sensor_words (&self)->[SensorWord;6] {
        [self.roll, self.pitch, self.track, self.heading, self.vertical_speed, self.ground_speed]
    }
}

/// mailbox for the latest received signal values. Each signal overwrites exactly one snapshot field
/// and marks the aggregator as dirty. There is no validation and no derived computation here
#[derive(Debug)]
pub struct SignalAggregator {
    side: DisplaySide,
    snapshot: FlightPathSnapshot,
    dirty: bool,
    update_count: u64,
}

impl SignalAggregator {
    pub fn new (side: DisplaySide)->Self {
        SignalAggregator {
            side,
            snapshot: FlightPathSnapshot::default(),
            dirty: false,
            update_count: 0
        }
    }

    pub fn side (&self)->DisplaySide { self.side }

    /// apply a signal, returning false if it was addressed to the other display side
    pub fn on_signal (&mut self, signal: Signal)->bool {
        let snap = &mut self.snapshot;

        match signal {
            Signal::Fd1Active(b) => {
                if self.side != DisplaySide::One { return false }
                snap.fd_engaged = b
            }
            Signal::Fd2Active(b) => {
                if self.side != DisplaySide::Two { return false }
                snap.fd_engaged = b
            }
            Signal::TrkFpaActive(b) => snap.trk_fpa_display_active = b,
            Signal::GroundTrack(w) => snap.track = w,
            Signal::Heading(w) => snap.heading = w,
            Signal::Roll(w) => snap.roll = w,
            Signal::Pitch(w) => snap.pitch = w,
            Signal::VerticalSpeed(w) => snap.vertical_speed = w,
            Signal::GroundSpeed(w) => snap.ground_speed = w,
            Signal::ActiveLateralMode(m) => snap.active_lateral_mode = m,
            Signal::ActiveVerticalMode(m) => snap.active_vertical_mode = m,
            Signal::FdPitch(d) => snap.fd_commanded_pitch_deg = d,
            Signal::FdBank(d) => snap.fd_commanded_roll_deg = d,
        }

        trace!("applied {signal}");
        self.dirty = true;
        self.update_count += 1;
        true
    }

    /// read-only view of the current values. Since signal handlers and ticks are executed on the same
    /// task this is always a consistent point-in-time view
    pub fn snapshot (&self)->&FlightPathSnapshot { &self.snapshot }

    pub fn is_dirty (&self)->bool { self.dirty }

    /// return the dirty flag and reset it
    pub fn take_dirty (&mut self)->bool {
        std::mem::replace( &mut self.dirty, false)
    }

    /// number of applied signals since construction
    pub fn update_count (&self)->u64 { self.update_count }
}
