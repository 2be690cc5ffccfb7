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

use std::fmt;
use serde::{Serialize,Deserialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{errors::{Result, parse_error}, sensor_word::SensorWord};

/// the named bus channels we consume. The serialized names are the ones used by the signal publisher
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,EnumString,Display,AsRefStr,EnumIter)]
pub enum SignalName {
    #[strum(serialize="fd1Active")] Fd1Active,
    #[strum(serialize="fd2Active")] Fd2Active,
    #[strum(serialize="trkFpaActive")] TrkFpaActive,
    #[strum(serialize="groundTrackAr")] GroundTrack,
    #[strum(serialize="headingAr")] Heading,
    #[strum(serialize="rollAr")] Roll,
    #[strum(serialize="pitchAr")] Pitch,
    #[strum(serialize="vs")] VerticalSpeed,
    #[strum(serialize="gs")] GroundSpeed,
    #[strum(serialize="activeLateralMode")] ActiveLateralMode,
    #[strum(serialize="activeVerticalMode")] ActiveVerticalMode,
    #[strum(serialize="fdPitch")] FdPitch,
    #[strum(serialize="fdBank")] FdBank,
    #[strum(serialize="realTime")] RealTime,
}

/// a single update received from the signal bus. Each variant carries the typed payload of its channel
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub enum Signal {
    Fd1Active(bool),
    Fd2Active(bool),
    TrkFpaActive(bool),
    GroundTrack(SensorWord),
    Heading(SensorWord),
    Roll(SensorWord),
    Pitch(SensorWord),
    VerticalSpeed(SensorWord),
    GroundSpeed(SensorWord),
    ActiveLateralMode(i32),
    ActiveVerticalMode(i32),
    FdPitch(f64),
    FdBank(f64),
}

impl Signal {
    pub fn name (&self)->SignalName {
        match self {
            Signal::Fd1Active(_) => SignalName::Fd1Active,
            Signal::Fd2Active(_) => SignalName::Fd2Active,
            Signal::TrkFpaActive(_) => SignalName::TrkFpaActive,
            Signal::GroundTrack(_) => SignalName::GroundTrack,
            Signal::Heading(_) => SignalName::Heading,
            Signal::Roll(_) => SignalName::Roll,
            Signal::Pitch(_) => SignalName::Pitch,
            Signal::VerticalSpeed(_) => SignalName::VerticalSpeed,
            Signal::GroundSpeed(_) => SignalName::GroundSpeed,
            Signal::ActiveLateralMode(_) => SignalName::ActiveLateralMode,
            Signal::ActiveVerticalMode(_) => SignalName::ActiveVerticalMode,
            Signal::FdPitch(_) => SignalName::FdPitch,
            Signal::FdBank(_) => SignalName::FdBank,
        }
    }

    /// discrete (flag and mode) channels are only published when their value changes
    pub fn is_discrete (&self)->bool {
        matches!( self,
            Signal::Fd1Active(_) | Signal::Fd2Active(_) | Signal::TrkFpaActive(_) |
            Signal::ActiveLateralMode(_) | Signal::ActiveVerticalMode(_)
        )
    }

    /// create a signal from its channel name and textual payload.
    /// Note that `realTime` is not a signal but a clock tick, i.e. it is rejected here
    pub fn parse (name: &str, payload: &str)->Result<Signal> {
        let sig_name: SignalName = name.trim().parse().map_err(|_| parse_error!("unknown signal '{}'", name))?;
        let payload = payload.trim();

        let signal = match sig_name {
            SignalName::Fd1Active => Signal::Fd1Active( parse_bool( payload)?),
            SignalName::Fd2Active => Signal::Fd2Active( parse_bool( payload)?),
            SignalName::TrkFpaActive => Signal::TrkFpaActive( parse_bool( payload)?),
            SignalName::GroundTrack => Signal::GroundTrack( payload.parse()?),
            SignalName::Heading => Signal::Heading( payload.parse()?),
            SignalName::Roll => Signal::Roll( payload.parse()?),
            SignalName::Pitch => Signal::Pitch( payload.parse()?),
            SignalName::VerticalSpeed => Signal::VerticalSpeed( payload.parse()?),
            SignalName::GroundSpeed => Signal::GroundSpeed( payload.parse()?),
            SignalName::ActiveLateralMode => Signal::ActiveLateralMode( parse_mode( payload)?),
            SignalName::ActiveVerticalMode => Signal::ActiveVerticalMode( parse_mode( payload)?),
            SignalName::FdPitch => Signal::FdPitch( parse_degrees( payload)?),
            SignalName::FdBank => Signal::FdBank( parse_degrees( payload)?),
            SignalName::RealTime => return Err( parse_error!("'{}' is a clock tick, not a signal", name))
        };
        Ok(signal)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Fd1Active(b) | Signal::Fd2Active(b) | Signal::TrkFpaActive(b) => write!( f, "{}={}", self.name(), b),
            Signal::GroundTrack(w) | Signal::Heading(w) | Signal::Roll(w) | Signal::Pitch(w) |
            Signal::VerticalSpeed(w) | Signal::GroundSpeed(w) => write!( f, "{}={}", self.name(), w),
            Signal::ActiveLateralMode(m) | Signal::ActiveVerticalMode(m) => write!( f, "{}={}", self.name(), m),
            Signal::FdPitch(d) | Signal::FdBank(d) => write!( f, "{}={}", self.name(), d),
        }
    }
}

fn parse_bool (s: &str)->Result<bool> {
    match s {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err( parse_error!("invalid flag '{}'", s))
    }
}

fn parse_mode (s: &str)->Result<i32> {
    s.parse().map_err(|_| parse_error!("invalid mode '{}'", s))
}

fn parse_degrees (s: &str)->Result<f64> {
    s.parse().map_err(|_| parse_error!("invalid degrees '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use crate::sensor_word::SignStatus;

    #[test]
    fn test_names() {
        for name in SignalName::iter() {
            let s = name.to_string();
            assert_eq!( s.parse::<SignalName>().unwrap(), name);
        }
        assert_eq!( SignalName::GroundTrack.as_ref(), "groundTrackAr");
    }

    #[test]
    fn test_parse() {
        assert_eq!( Signal::parse("fd1Active", "true").unwrap(), Signal::Fd1Active(true));
        assert_eq!( Signal::parse("activeLateralMode", " 34 ").unwrap(), Signal::ActiveLateralMode(34));
        assert_eq!( Signal::parse("fdBank", "-12.5").unwrap(), Signal::FdBank(-12.5));

        match Signal::parse("rollAr", "5:fw").unwrap() {
            Signal::Roll(w) => { assert_eq!( w.value(), 5.0); assert_eq!( w.status(), SignStatus::FailureWarning); }
            other => panic!("wrong signal {other:?}")
        }

        assert!( Signal::parse("realTime", "0").is_err());
        assert!( Signal::parse("bogus", "0").is_err());
        assert!( Signal::parse("trkFpaActive", "yes").is_err());
    }

    #[test]
    fn test_discrete() {
        assert!( Signal::TrkFpaActive(true).is_discrete());
        assert!( Signal::ActiveVerticalMode(1).is_discrete());
        assert!( !Signal::FdPitch(1.0).is_discrete());
        assert!( !Signal::GroundSpeed( SensorWord::normal(200.0)).is_discrete());
    }
}
