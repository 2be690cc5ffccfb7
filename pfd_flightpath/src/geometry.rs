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

//! the transformation from fused sensor state into the screen offset and rotation of the flight path
//! director symbol. All functions in here are pure

use std::fmt;
use serde::Serialize;
use tracing::warn;
use uom::si::f64::Velocity;
use pfd_common::{angle::smallest_angle, clamp_abs, cos, sin, atan, deg, rad, pow2, uom::{as_feet_per_minute, as_knots, feet_per_minute, knots}};

use crate::aggregator::FlightPathSnapshot;

//--- calibration constants

/// max magnitude of the commanded roll we display
pub const FD_ROLL_LIMIT_DEG: f64 = 45.0;
/// max magnitude of the commanded pitch we display
pub const FD_PITCH_LIMIT_DEG: f64 = 22.5;
/// converts commanded pitch into the pitch scale of the attitude display
pub const FD_PITCH_GAIN: f64 = 1.9;
/// turns ft/min over kn into the dimensionless climb ratio
pub const FPA_UNIT_FACTOR: f64 = 0.009875;
/// max magnitude of the drift angle we display
pub const DRIFT_LIMIT_DEG: f64 = 21.0;
/// pixel distance between heading scale ticks
pub const DISTANCE_SPACING: f64 = 15.0;
/// heading value between scale ticks
pub const VALUE_SPACING: f64 = 10.0;
/// attenuates the displayed bank cue relative to the commanded roll
pub const FD_ROLL_DAMPING: f64 = 0.77;
/// rotation center of the symbol wings in symbol coordinates
pub const WING_PIVOT: (f64,f64) = (15.5, 15.5);
/// ground speeds (kn) below this are treated as zero when computing the flight path angle
pub const MIN_GROUND_SPEED: f64 = 1e-6;

/// maps a pitch angle to the vertical displacement (in pixels) on the attitude display
pub trait HorizonScale {
    fn offset_from_pitch (&self, pitch_deg: f64)->f64;
}

/// the non-linear pitch scale of the primary flight display. Linear around the horizon with
/// compressed segments beyond, continuous and monotonic across all breakpoints
#[derive(Debug,Default,Clone,Copy)]
pub struct PfdPitchScale;

impl HorizonScale for PfdPitchScale {
    fn offset_from_pitch (&self, p: f64)->f64 {
        if p > -5.0 && p <= 20.0 {
            p * 1.8
        } else if p > 20.0 && p <= 30.0 {
            -0.04 * pow2(p) + 3.4 * p - 16.0
        } else if p > 30.0 {
            p + 20.0
        } else if p >= -15.0 {
            0.04 * pow2(p) + 2.2 * p + 1.0
        } else {
            p - 8.0
        }
    }
}

/// flight path angle in degrees for a vertical speed in ft/min and ground speed in kn.
/// Degenerate ground speeds are resolved explicitly: level for zero vertical speed, otherwise
/// straight up/down. The result is always finite
pub fn flight_path_angle (vs_fpm: f64, gs_kn: f64)->f64 {
    if vs_fpm.is_nan() || gs_kn.is_nan() {
        warn!("undefined flight path angle for vs={vs_fpm}, gs={gs_kn}");
        return 0.0
    }

    if gs_kn.abs() < MIN_GROUND_SPEED {
        if vs_fpm == 0.0 { 0.0 } else { 90.0_f64.copysign( vs_fpm) }
    } else {
        let fpa = deg( atan( vs_fpm / gs_kn * FPA_UNIT_FACTOR));
        if fpa.is_finite() { fpa } else { 0.0 } // both infinite
    }
}

/// typed version of [`flight_path_angle`]
pub fn flight_path_angle_from (vs: Velocity, gs: Velocity)->f64 {
    flight_path_angle( as_feet_per_minute(vs), as_knots(gs))
}

/// signed angle from heading to track
#[inline]
pub fn drift_angle (track_deg: f64, heading_deg: f64)->f64 {
    smallest_angle( track_deg, heading_deg)
}

/// horizontal pixel offset for a drift angle
#[inline]
pub fn drift_offset (drift_deg: f64)->f64 {
    clamp_abs( drift_deg, DRIFT_LIMIT_DEG) * DISTANCE_SPACING / VALUE_SPACING
}

#[inline]
pub fn limit_fd_roll (roll_deg: f64)->f64 {
    clamp_abs( roll_deg, FD_ROLL_LIMIT_DEG)
}

#[inline]
pub fn limit_fd_pitch (pitch_deg: f64)->f64 {
    clamp_abs( pitch_deg, FD_PITCH_LIMIT_DEG)
}

/// offset and wing rotation of the symbol
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct FpdTransform {
    pub offset_x: f64,
    pub offset_y: f64,
    pub rotation_deg: f64,
}

impl FpdTransform {
    pub fn css_translate (&self)->String {
        format!("translate3d({}px, {}px, 0px)", self.offset_x, self.offset_y)
    }

    pub fn svg_rotate (&self)->String {
        format!("rotate({} {} {})", self.rotation_deg, WING_PIVOT.0, WING_PIVOT.1)
    }
}

impl fmt::Display for FpdTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "FpdTransform( x: {:.2}, y: {:.2}, rot: {:.2} )", self.offset_x, self.offset_y, self.rotation_deg)
    }
}

/// the seam between scheduler and geometry computation
pub trait GeometryEngine {
    fn compute (&self, snap: &FlightPathSnapshot)->FpdTransform;
}

#[derive(Debug,Default,Clone,Copy)]
pub struct FlightPathGeometry<H: HorizonScale = PfdPitchScale> {
    scale: H,
}

impl<H: HorizonScale> FlightPathGeometry<H> {
    pub fn new (scale: H)->Self { FlightPathGeometry { scale } }
}

impl<H: HorizonScale> GeometryEngine for FlightPathGeometry<H> {
    fn compute (&self, snap: &FlightPathSnapshot)->FpdTransform {
        // note we use raw values here, regardless of word status
        let fd_roll = limit_fd_roll( snap.fd_commanded_roll_deg);
        let fd_pitch = limit_fd_pitch( snap.fd_commanded_pitch_deg) * FD_PITCH_GAIN;

        let vs = feet_per_minute( snap.vertical_speed.value());
        let gs = knots( snap.ground_speed.value());
        let fpa = flight_path_angle_from( vs, gs);
        let da = drift_angle( snap.track.value(), snap.heading.value());

        let lateral = drift_offset( da);
        let vertical = self.scale.offset_from_pitch( -snap.pitch.value()) - self.scale.offset_from_pitch( fpa);

        let roll = rad( snap.roll.value());
        let roll_cos = cos(roll);
        let roll_sin = sin(roll);

        // flight path vector in screen space
        let x_fpv = lateral * roll_cos - vertical * roll_sin;
        let y_fpv = vertical * roll_cos + lateral * roll_sin;

        FpdTransform {
            offset_x: x_fpv - fd_pitch * roll_sin,
            offset_y: y_fpv + fd_pitch * roll_cos,
            rotation_deg: fd_roll * FD_ROLL_DAMPING,
        }
    }
}
