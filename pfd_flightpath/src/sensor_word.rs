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

use std::{fmt, str::FromStr};
use serde::{Serialize,Deserialize};

use crate::errors::{PfdFlightPathError, parse_error};

/// the two-bit sign/status matrix (SSM) that qualifies each value word on the avionics bus
#[repr(u8)]
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum SignStatus {
    FailureWarning  = 0b00,
    NoComputedData  = 0b01,
    FunctionalTest  = 0b10,
    NormalOperation = 0b11,
}

impl SignStatus {
    pub fn from_bits (bits: u8)->Self {
        match bits & 0b11 {
            0b00 => SignStatus::FailureWarning,
            0b01 => SignStatus::NoComputedData,
            0b10 => SignStatus::FunctionalTest,
            _    => SignStatus::NormalOperation,
        }
    }

    pub fn bits (&self)->u8 { *self as u8 }

    pub fn abbrev (&self)->&'static str {
        match self {
            SignStatus::FailureWarning => "fw",
            SignStatus::NoComputedData => "ncd",
            SignStatus::FunctionalTest => "ft",
            SignStatus::NormalOperation => "no",
        }
    }
}

impl FromStr for SignStatus {
    type Err = PfdFlightPathError;

    fn from_str (s: &str)->Result<Self,Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fw" => Ok(SignStatus::FailureWarning),
            "ncd" => Ok(SignStatus::NoComputedData),
            "ft" => Ok(SignStatus::FunctionalTest),
            "no" => Ok(SignStatus::NormalOperation),
            other => Err(parse_error!("unknown sign status '{}'", other))
        }
    }
}

/// a fault annotated sensor reading. SensorWords are immutable and get replaced as a whole
/// whenever a new reading arrives.
///
/// Note that consumers are responsible for checking the status - `value()` is always available,
/// even if the status says it should not be trusted
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct SensorWord {
    value: f64,
    status: SignStatus,
}

const SSM_SHIFT: u32 = 32;
const VALUE_MASK: i64 = 0xffff_ffff;

impl SensorWord {
    pub fn new (value: f64, status: SignStatus)->Self {
        SensorWord { value, status }
    }

    pub fn normal (value: f64)->Self {
        SensorWord { value, status: SignStatus::NormalOperation }
    }

    /// decode a bus word: the low 32 bits hold the f32 bit pattern of the value, the two bits
    /// above it the SSM
    pub fn from_raw (word: f64)->Self {
        let w = word.trunc() as i64;
        let value = f32::from_bits( (w & VALUE_MASK) as u32) as f64;
        let status = SignStatus::from_bits( ((w >> SSM_SHIFT) & 0b11) as u8);
        SensorWord { value, status }
    }

    /// the value is encoded as f32, i.e. this only round trips for f32 representable values
    pub fn to_raw (&self)->f64 {
        let bits = ((self.status.bits() as u64) << SSM_SHIFT) | (self.value as f32).to_bits() as u64;
        bits as f64
    }

    /// the word we start out with before any reading was received
    pub fn empty ()->Self { SensorWord::from_raw(0.0) }

    #[inline] pub fn value (&self)->f64 { self.value }
    #[inline] pub fn status (&self)->SignStatus { self.status }

    #[inline] pub fn is_normal_operation (&self)->bool { self.status == SignStatus::NormalOperation }
    #[inline] pub fn is_failure_warning (&self)->bool { self.status == SignStatus::FailureWarning }
    #[inline] pub fn is_no_computed_data (&self)->bool { self.status == SignStatus::NoComputedData }
    #[inline] pub fn is_functional_test (&self)->bool { self.status == SignStatus::FunctionalTest }

    /// the value if this word can be trusted, `default` otherwise
    pub fn value_or (&self, default: f64)->f64 {
        if self.is_normal_operation() { self.value } else { default }
    }
}

impl Default for SensorWord {
    fn default()->Self { SensorWord::empty() }
}

impl fmt::Display for SensorWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}:{}", self.value, self.status.abbrev())
    }
}

/// parse the text form `❬value❭[:❬ssm❭]`. A missing ssm means normal operation
impl FromStr for SensorWord {
    type Err = PfdFlightPathError;

    fn from_str (s: &str)->Result<Self,Self::Err> {
        let (v, ssm) = match s.split_once(':') {
            Some((v,ssm)) => (v, ssm.parse::<SignStatus>()?),
            None => (s, SignStatus::NormalOperation)
        };
        let value: f64 = v.trim().parse().map_err(|_| parse_error!("invalid sensor value '{}'", v))?;
        Ok( SensorWord::new( value, ssm))
    }
}
