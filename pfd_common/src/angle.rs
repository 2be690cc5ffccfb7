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

/// map `d` into [-180,180]. Note that both ends are inclusive so that negation commutes with normalization
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

/// the signed shortest rotation (in degrees) that turns `from` into `to`, i.e. a positive value
/// means `to` is clockwise of `from` for compass angles.
/// This is antisymmetric: `smallest_angle(a,b) == -smallest_angle(b,a)`
#[inline]
pub fn smallest_angle (to: f64, from: f64) -> f64 {
    normalize_180( to - from)
}
