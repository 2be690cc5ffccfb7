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

use pfd_common::angle::*;

// run with "cargo test -p pfd_common test_smallest -- --nocapture"

const SAMPLE: [f64; 13] = [-180.0, -179.5, -135.0, -90.0, -45.5, -10.0, 0.0, 0.25, 33.3, 90.0, 120.0, 179.0, 180.0];

#[test]
fn test_smallest_angle_identity() {
    for a in SAMPLE {
        assert_eq!( smallest_angle( a, a), 0.0, "smallest_angle({a},{a})");
    }
    for a in [0.0, 359.0, 720.0, -540.0] {
        assert_eq!( smallest_angle( a, a), 0.0);
    }
}

#[test]
fn test_smallest_angle_antisymmetry() {
    for a in SAMPLE {
        for b in SAMPLE {
            let ab = smallest_angle( a, b);
            let ba = smallest_angle( b, a);
            assert_eq!( ab, -ba, "smallest_angle({a},{b})={ab} vs smallest_angle({b},{a})={ba}");
            assert!( ab >= -180.0 && ab <= 180.0);
        }
    }
}

#[test]
fn test_smallest_angle_wraparound() {
    println!("\n--- test_smallest_angle_wraparound");
    assert_eq!( smallest_angle( 10.0, 0.0), 10.0);
    assert_eq!( smallest_angle( 0.0, 10.0), -10.0);
    assert_eq!( smallest_angle( 5.0, 355.0), 10.0);
    assert_eq!( smallest_angle( 355.0, 5.0), -10.0);
    assert_eq!( smallest_angle( 190.0, 0.0), -170.0);
    assert_eq!( smallest_angle( 180.0, 0.0), 180.0);
    assert_eq!( smallest_angle( 0.0, 180.0), -180.0);

    // un-normalized compass angles
    assert_eq!( smallest_angle( 370.0, -5.0), 15.0);
    assert_eq!( smallest_angle( -5.0, 370.0), -15.0);
}

#[test]
fn test_normalize() {
    assert_eq!( normalize_180( 540.0), 180.0);
    assert_eq!( normalize_180( -190.0), 170.0);
    assert_eq!( normalize_180( -540.0), -180.0);
    assert_eq!( normalize_180( 725.0), 5.0);
}

