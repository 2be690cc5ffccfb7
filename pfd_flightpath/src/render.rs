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

use serde::Serialize;
use tracing::{debug,info};

use crate::geometry::FpdTransform;

/// the external renderer of the flight path director symbol. Implementations have to return
/// promptly - they are called from within the tick handler
pub trait RenderSink {
    fn set_visible (&mut self, visible: bool);
    fn set_transform (&mut self, transform: &FpdTransform);
}

impl<T> RenderSink for &mut T where T: RenderSink + ?Sized {
    fn set_visible (&mut self, visible: bool) { (**self).set_visible( visible) }
    fn set_transform (&mut self, transform: &FpdTransform) { (**self).set_transform( transform) }
}

/// a sink that just logs what would be rendered
#[derive(Debug,Default)]
pub struct TracingSink;

impl RenderSink for TracingSink {
    fn set_visible (&mut self, visible: bool) {
        info!("flight path director visible: {visible}");
    }

    fn set_transform (&mut self, t: &FpdTransform) {
        debug!("{} {}", t.css_translate(), t.svg_rotate());
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub enum SinkCall {
    Visible(bool),
    Transform(FpdTransform),
}

/// a sink that records all calls in order
#[derive(Debug,Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl RecordingSink {
    pub fn new()->Self { RecordingSink { calls: Vec::new() } }

    pub fn n_transforms (&self)->usize {
        self.calls.iter().filter( |c| matches!( c, SinkCall::Transform(_))).count()
    }

    pub fn last_transform (&self)->Option<&FpdTransform> {
        self.calls.iter().rev().find_map( |c| if let SinkCall::Transform(t) = c { Some(t) } else { None })
    }

    /// the visibility the renderer currently has, assuming it started out hidden
    pub fn is_visible (&self)->bool {
        self.calls.iter().rev().find_map( |c| if let SinkCall::Visible(v) = c { Some(*v) } else { None }).unwrap_or(false)
    }

    pub fn drain (&mut self)->Vec<SinkCall> {
        std::mem::take( &mut self.calls)
    }
}

impl RenderSink for RecordingSink {
    fn set_visible (&mut self, visible: bool) { self.calls.push( SinkCall::Visible(visible)) }
    fn set_transform (&mut self, t: &FpdTransform) { self.calls.push( SinkCall::Transform(*t)) }
}
