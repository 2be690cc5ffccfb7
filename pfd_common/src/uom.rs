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

use uom::si::{f64::Velocity, velocity::{knot,foot_per_minute}};

#[inline]
pub fn knots (v: f64)->Velocity { Velocity::new::<knot>(v) }

#[inline]
pub fn feet_per_minute (v: f64)->Velocity { Velocity::new::<foot_per_minute>(v) }

#[inline]
pub fn as_knots (v: Velocity)->f64 { v.get::<knot>() }

#[inline]
pub fn as_feet_per_minute (v: Velocity)->f64 { v.get::<foot_per_minute>() }
