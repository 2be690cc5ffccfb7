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

use std::cell::Cell;
use pfd_common::datetime::EpochMillis;
use pfd_flightpath::{
    DisplaySide, FlightPathSnapshot, FpdConfig, FpdTransform, GeometryEngine, RecordingSink, SensorWord,
    Signal, SinkCall, UpdateScheduler, Visibility
};

// run with "cargo test -p pfd_flightpath --test test_scheduler -- --nocapture"

/// geometry spy that counts invocations
#[derive(Default)]
struct CountingGeometry {
    n_calls: Cell<usize>,
}

impl GeometryEngine for CountingGeometry {
    fn compute (&self, snap: &FlightPathSnapshot)->FpdTransform {
        self.n_calls.set( self.n_calls.get() + 1);
        FpdTransform { offset_x: snap.track.value(), offset_y: 0.0, rotation_deg: 0.0 }
    }
}

fn activate<S,G> (scheduler: &mut UpdateScheduler<S,G>) where S: pfd_flightpath::RenderSink, G: GeometryEngine {
    scheduler.on_signal( Signal::Fd1Active(true));
    scheduler.on_signal( Signal::TrkFpaActive(true));
    scheduler.on_signal( Signal::ActiveLateralMode(5));
}

fn t (millis: i64)->EpochMillis { EpochMillis::new(millis) }

#[test]
fn test_dirty_flag_suppresses_recomputation() {
    let mut scheduler = UpdateScheduler::with_geometry( DisplaySide::One, false, CountingGeometry::default(), RecordingSink::new());
    activate( &mut scheduler);

    let intent = scheduler.on_tick( t(0));
    assert!( intent.visible);
    assert!( intent.transform.is_some());
    assert_eq!( scheduler.geometry().n_calls.get(), 1);

    // no signals in between
    let intent = scheduler.on_tick( t(30));
    assert!( intent.visible);
    assert!( intent.transform.is_none());
    assert_eq!( scheduler.geometry().n_calls.get(), 1);

    // identical reading still counts as a change
    scheduler.on_signal( Signal::GroundTrack( SensorWord::normal(0.0)));
    scheduler.on_signal( Signal::GroundTrack( SensorWord::normal(0.0)));
    scheduler.on_tick( t(60));
    assert_eq!( scheduler.geometry().n_calls.get(), 2);
    assert_eq!( scheduler.n_geometry_updates(), 2);
    assert_eq!( scheduler.n_ticks(), 3);
    assert_eq!( scheduler.last_tick(), Some( t(60)));
}

#[test]
fn test_no_geometry_while_hidden() {
    let mut scheduler = UpdateScheduler::with_geometry( DisplaySide::One, false, CountingGeometry::default(), RecordingSink::new());
    scheduler.on_signal( Signal::Roll( SensorWord::normal(3.0)));

    for i in 0..5 {
        let intent = scheduler.on_tick( t(i*30));
        assert!( !intent.visible);
    }
    assert_eq!( scheduler.geometry().n_calls.get(), 0);
    assert!( scheduler.sink().calls.is_empty()); // we start hidden, nothing to notify
    assert!( scheduler.aggregator().is_dirty()); // kept for when we get shown
}

#[test]
fn test_visibility_notifications() {
    let mut scheduler = UpdateScheduler::new( &FpdConfig::default(), RecordingSink::new()).unwrap();
    activate( &mut scheduler);
    scheduler.on_signal( Signal::GroundSpeed( SensorWord::normal(200.0)));
    scheduler.on_signal( Signal::GroundTrack( SensorWord::normal(10.0)));

    scheduler.on_tick( t(0));
    scheduler.on_tick( t(30));
    assert_eq!( scheduler.visibility(), Visibility::Shown);

    scheduler.on_signal( Signal::TrkFpaActive(false));
    scheduler.on_tick( t(60));
    scheduler.on_tick( t(90));
    assert_eq!( scheduler.visibility(), Visibility::Hidden);

    let calls = &scheduler.sink().calls;
    println!("sink calls: {calls:?}");
    assert_eq!( calls.len(), 3);
    assert_eq!( calls[0], SinkCall::Visible(true));
    match calls[1] {
        SinkCall::Transform(t) => assert_eq!( t.offset_x, 15.0),
        other => panic!("expected transform, got {other:?}")
    }
    assert_eq!( calls[2], SinkCall::Visible(false));
    assert!( !scheduler.sink().is_visible());
}

#[test]
fn test_rapid_toggling() {
    let mut scheduler = UpdateScheduler::new( &FpdConfig::default(), RecordingSink::new()).unwrap();
    activate( &mut scheduler);

    for i in 0..4 {
        scheduler.on_signal( Signal::Fd1Active( i % 2 == 1));
        let intent = scheduler.on_tick( t(i*30));
        assert_eq!( intent.visible, i % 2 == 1);
    }
    // the first (hidden) tick does not change anything since we start out hidden
    let n_visible_calls = scheduler.sink().calls.iter().filter( |c| matches!(c, SinkCall::Visible(_))).count();
    assert_eq!( n_visible_calls, 3);
    assert_eq!( scheduler.sink().n_transforms(), 2);
}

#[test]
fn test_other_side_fd_ignored() {
    let config = FpdConfig { display_index: 2, ..FpdConfig::default() };
    let mut scheduler = UpdateScheduler::new( &config, RecordingSink::new()).unwrap();
    scheduler.on_signal( Signal::TrkFpaActive(true));
    scheduler.on_signal( Signal::ActiveVerticalMode(11));
    scheduler.on_signal( Signal::Fd1Active(false)); // captain side, not ours

    assert!( scheduler.on_tick( t(0)).visible);

    scheduler.on_signal( Signal::Fd2Active(false));
    assert!( !scheduler.on_tick( t(30)).visible);
}

#[test]
fn test_status_gating_toggle() {
    let config = FpdConfig { gate_on_sensor_status: true, ..FpdConfig::default() };
    let mut scheduler = UpdateScheduler::new( &config, RecordingSink::new()).unwrap();
    activate( &mut scheduler);
    assert!( !scheduler.on_tick( t(0)).visible); // all words still failure warnings

    for sig in [Signal::Roll, Signal::Pitch, Signal::GroundTrack, Signal::Heading, Signal::VerticalSpeed] {
        scheduler.on_signal( sig( SensorWord::normal(0.0)));
    }
    scheduler.on_signal( Signal::GroundSpeed( SensorWord::normal(150.0)));
    let intent = scheduler.on_tick( t(30));
    assert!( intent.visible);
    assert!( intent.transform.is_some());

    scheduler.on_signal( Signal::Pitch( "2.0:ncd".parse().unwrap()));
    assert!( !scheduler.on_tick( t(60)).visible);
}

#[test]
fn test_invalid_config() {
    let config = FpdConfig { display_index: 0, ..FpdConfig::default() };
    assert!( UpdateScheduler::new( &config, RecordingSink::new()).is_err());
}
