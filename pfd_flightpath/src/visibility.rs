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
use tracing::debug;

use crate::aggregator::FlightPathSnapshot;

/// no active mode
pub const MODE_NONE: i32 = 0;
/// lateral or vertical mode without a flight path directing command
pub const MODE_A: i32 = 34;
/// lateral mode without a flight path directing command
pub const MODE_B: i32 = 40;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    pub fn is_shown (&self)->bool { *self == Visibility::Shown }
}

/// does the active lateral mode produce a directional command
pub fn shows_lateral (mode: i32)->bool {
    mode != MODE_NONE && mode != MODE_A && mode != MODE_B
}

/// does the active vertical mode produce a directional command
pub fn shows_vertical (mode: i32)->bool {
    mode != MODE_NONE && mode != MODE_A
}

/// decides if the flight path director is shown. The decision is re-computed from scratch for
/// each snapshot - there is no hysteresis.
///
/// If `gate_on_sensor_status` is set the symbol is also hidden while any of the geometry input
/// words is not in normal operation. Without it invalid words are consumed as-is
#[derive(Debug)]
pub struct VisibilityStateMachine {
    state: Visibility,
    gate_on_sensor_status: bool,
}

impl VisibilityStateMachine {
    pub fn new (gate_on_sensor_status: bool)->Self {
        VisibilityStateMachine { state: Visibility::Hidden, gate_on_sensor_status }
    }

    pub fn state (&self)->Visibility { self.state }

    pub fn evaluate (&self, snap: &FlightPathSnapshot)->Visibility {
        let has_command = shows_lateral( snap.active_lateral_mode) || shows_vertical( snap.active_vertical_mode);
        let mut shown = has_command && snap.trk_fpa_display_active && snap.fd_engaged;

        if shown && self.gate_on_sensor_status {
            shown = snap.sensor_words().iter().all( |w| w.is_normal_operation());
        }

        if shown { Visibility::Shown } else { Visibility::Hidden }
    }

    /// evaluate and record the new state, returning it only if it differs from the previous one
    pub fn step (&mut self, snap: &FlightPathSnapshot)->Option<Visibility> {
        let new_state = self.evaluate( snap);
        if new_state != self.state {
            debug!("flight path director {:?} -> {:?}", self.state, new_state);
            self.state = new_state;
            Some(new_state)
        } else {
            None
        }
    }
}
