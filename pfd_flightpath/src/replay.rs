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

//! text format for recorded bus traffic: one `❬epoch-millis❭ ❬signal-name❭ ❬payload❭` entry per line.
//! `realTime` entries are clock ticks and don't need a payload. Empty lines and lines starting with
//! `#` are ignored. Anything after the payload makes the line invalid

use std::{fs::File, io::{BufRead, BufReader}, path::Path};
use tracing::warn;
use pfd_common::datetime::EpochMillis;

use crate::{bus::BusEvent, errors::{Result, parse_error}, signals::{Signal, SignalName}};

pub fn parse_replay_line (line: &str)->Result<Option<BusEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') { return Ok(None) }

    let mut parts = line.split_whitespace();
    let millis: i64 = parts.next()
        .and_then( |s| s.parse().ok())
        .ok_or_else( || parse_error!("missing or invalid timestamp in '{}'", line))?;
    let name = parts.next().ok_or_else( || parse_error!("missing signal name in '{}'", line))?;

    let event = if name == SignalName::RealTime.as_ref() {
        BusEvent::Tick( EpochMillis::new( millis))
    } else {
        let payload = parts.next().ok_or_else( || parse_error!("missing payload in '{}'", line))?;
        BusEvent::Signal( Signal::parse( name, payload)?)
    };

    if let Some(extra) = parts.next() {
        return Err( parse_error!("unexpected '{}' in '{}'", extra, line))
    }
    Ok( Some(event))
}

/// read all valid events from a replay file. Malformed lines are reported and skipped
pub fn read_replay_file (path: impl AsRef<Path>)->Result<Vec<BusEvent>> {
    let reader = BufReader::new( File::open( path.as_ref())?);
    let mut events = Vec::new();

    for (i,line) in reader.lines().enumerate() {
        let line = line?;
        match parse_replay_line( &line) {
            Ok(Some(event)) => events.push(event),
            Ok(None) => {}
            Err(e) => warn!("skipping line {}: {}", i+1, e)
        }
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor_word::SensorWord;

    #[test]
    fn test_parse_lines() {
        assert_eq!( parse_replay_line("  ").unwrap(), None);
        assert_eq!( parse_replay_line("# comment").unwrap(), None);
        assert_eq!( parse_replay_line("1000 realTime").unwrap(), Some( BusEvent::Tick( EpochMillis::new(1000))));
        assert_eq!( parse_replay_line("1000 gs 210.5").unwrap(),
                    Some( BusEvent::Signal( Signal::GroundSpeed( SensorWord::normal(210.5)))));
        assert_eq!( parse_replay_line("1001 fd1Active false").unwrap(), Some( BusEvent::Signal( Signal::Fd1Active(false))));

        assert!( parse_replay_line("x gs 1").is_err());
        assert!( parse_replay_line("1000 gs").is_err());
        assert!( parse_replay_line("1000 nope 1").is_err());
        assert!( parse_replay_line("1000 gs 210.5 junk").is_err());
        assert!( parse_replay_line("1000 realTime 5").is_err());
    }
}
