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

pub mod macros;
pub mod angle;
pub mod datetime;
pub mod uom;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn sin(x:f64) -> f64 { x.sin() }
#[inline(always)] pub fn cos(x:f64) -> f64 { x.cos() }
#[inline(always)] pub fn atan(x:f64) -> f64 { x.atan() }
#[inline(always)] pub fn deg(x:f64)->f64 { x.to_degrees() }
#[inline(always)] pub fn rad(x:f64)->f64 { x.to_radians() }
#[inline(always)] pub fn pow2(x:f64) -> f64 { x*x }

/// clamp `v` into the symmetric interval [-limit,limit]. NaN values are passed through.
/// `limit` has to be non-negative
#[inline]
pub fn clamp_abs (v: f64, limit: f64)->f64 {
    v.clamp( -limit, limit)
}

/// approximate equality for values that went through trig functions
#[inline]
pub fn approx_eq (a: f64, b: f64, eps: f64)->bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_abs() {
        assert_eq!( clamp_abs( 50.0, 45.0), 45.0);
        assert_eq!( clamp_abs( -50.0, 45.0), -45.0);
        assert_eq!( clamp_abs( 12.5, 45.0), 12.5);
        assert!( clamp_abs( f64::NAN, 45.0).is_nan());
    }
}
