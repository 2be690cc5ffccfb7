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

use std::{fs, path::Path, time::Duration};
use serde::{Serialize,Deserialize};

use crate::{aggregator::DisplaySide, errors::{Result, config_error}};

/// runtime configuration of a flight path director instance
#[derive(Deserialize,Serialize,Debug,Clone,PartialEq)]
#[serde(default)]
pub struct FpdConfig {
    pub display_index: u8, // 1 or 2 - which flight director we follow
    pub gate_on_sensor_status: bool, // hide the symbol while any input word is not in normal operation
    pub tick_interval: Option<Duration>, // internal clock ticks. If None we rely on bus ticks only
    pub channel_bound: usize, // max number of queued bus events
}

impl Default for FpdConfig {
    fn default()->Self {
        FpdConfig {
            display_index: 1,
            gate_on_sensor_status: false,
            tick_interval: Some( Duration::from_millis(30)),
            channel_bound: 256
        }
    }
}

impl FpdConfig {
    pub fn validate (&self)->Result<()> {
        DisplaySide::try_from( self.display_index)?;
        if self.channel_bound == 0 { return Err( config_error!("channel_bound has to be > 0")) }
        if let Some(dt) = self.tick_interval {
            if dt.is_zero() { return Err( config_error!("tick_interval has to be > 0")) }
        }
        Ok(())
    }

    pub fn side (&self)->Result<DisplaySide> {
        DisplaySide::try_from( self.display_index)
    }
}

pub fn config_from_str (s: &str)->Result<FpdConfig> {
    let config: FpdConfig = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config_path (path: impl AsRef<Path>)->Result<FpdConfig> {
    let s = fs::read_to_string( path.as_ref())?;
    config_from_str( &s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let c = config_from_str( r#"(
            display_index: 2,
            gate_on_sensor_status: true,
            tick_interval: Some((secs: 0, nanos: 50000000)),
        )"#).unwrap();
        assert_eq!( c.side().unwrap(), DisplaySide::Two);
        assert!( c.gate_on_sensor_status);
        assert_eq!( c.tick_interval, Some( Duration::from_millis(50)));
        assert_eq!( c.channel_bound, 256);

        assert!( config_from_str( "(display_index: 3)").is_err());
        assert!( config_from_str( "(channel_bound: 0)").is_err());
        assert!( config_from_str( "(display_index: ").is_err());
    }

    #[test]
    fn test_shipped_config() {
        let c = load_config_path( concat!( env!("CARGO_MANIFEST_DIR"), "/configs/flightpath.ron")).unwrap();
        c.validate().unwrap();
    }
}
