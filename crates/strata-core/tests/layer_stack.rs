// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod common;

use common::{entries, journal, Journal, MockRenderer, RecordingLayer};
use strata_core::event::{Event, KeyPressedEvent, MouseMovedEvent};
use strata_core::layer::{FrameContext, LayerContext, LayerStack, Timestep};
use strata_core::platform::{InputState, KeyCode};

fn update_all(stack: &mut LayerStack, renderer: &MockRenderer) {
    let input = InputState::new();
    let ctx = FrameContext {
        renderer,
        input: &input,
        timestep: Timestep::from_seconds(1.0 / 60.0),
        window_size: (800, 600),
        frame_index: 0,
    };
    stack.update(&ctx);
}

fn key_event() -> Event {
    KeyPressedEvent::new(KeyCode::A, 0).into()
}

fn setup() -> (Journal, MockRenderer, LayerStack) {
    let journal = journal();
    let renderer = MockRenderer::new(&journal);
    (journal, renderer, LayerStack::new())
}

#[test]
fn layers_update_front_to_back_with_overlays_last() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L2", &journal)), &ctx);
    journal.borrow_mut().clear();

    update_all(&mut stack, &renderer);

    assert_eq!(entries(&journal), ["L1 update", "L2 update", "O update"]);
    assert_eq!(stack.layer_count(), 2);
    assert_eq!(stack.overlay_count(), 1);
    let names: Vec<_> = stack.iter().map(|(_, layer)| layer.name().to_owned()).collect();
    assert_eq!(names, ["L1", "L2", "O"]);
}

#[test]
fn overlay_pushed_first_still_updates_after_every_layer() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L2", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L3", &journal)), &ctx);
    journal.borrow_mut().clear();

    update_all(&mut stack, &renderer);

    assert_eq!(entries(&journal).last().map(String::as_str), Some("O update"));
}

#[test]
fn attach_runs_on_push() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (1, 1),
    };
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    assert_eq!(entries(&journal), ["L1 attach", "O attach"]);
}

#[test]
fn events_travel_back_to_front() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L2", &journal)), &ctx);
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    journal.borrow_mut().clear();

    let mut event = key_event();
    let handled = stack.propagate_event(&mut event);

    assert!(!handled);
    assert!(!event.is_handled());
    assert_eq!(
        entries(&journal),
        ["O event KeyPressed", "L2 event KeyPressed", "L1 event KeyPressed"]
    );
}

#[test]
fn propagation_stops_at_the_first_handler() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L2", &journal).handling()), &ctx);
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    journal.borrow_mut().clear();

    let mut event = key_event();
    assert!(stack.propagate_event(&mut event));
    assert!(event.is_handled());
    assert_eq!(entries(&journal), ["O event KeyPressed", "L2 event KeyPressed"]);
}

#[test]
fn an_already_handled_event_still_reaches_the_top_layer_only() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L2", &journal)), &ctx);
    journal.borrow_mut().clear();

    let mut event: Event = MouseMovedEvent::new(1.0, 2.0).into();
    event.mark_handled();
    assert!(stack.propagate_event(&mut event));
    assert_eq!(entries(&journal), ["L2 event MouseMoved"]);
}

#[test]
fn an_already_handled_event_on_an_empty_stack_stays_handled() {
    let (_journal, _renderer, mut stack) = setup();
    let mut event: Event = MouseMovedEvent::new(1.0, 2.0).into();
    event.mark_handled();
    assert!(stack.propagate_event(&mut event));
}

#[test]
fn popping_detaches_exactly_one_layer() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    let l1 = stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    let l2 = stack.push_layer(Box::new(RecordingLayer::new("L2", &journal)), &ctx);
    let o = stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    journal.borrow_mut().clear();

    let popped = stack.pop_layer(l1).expect("L1 is on the stack");
    assert_eq!(popped.name(), "L1");
    assert_eq!(entries(&journal), ["L1 detach"]);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.layer_count(), 1);

    // New layers still land before the overlay region.
    stack.push_layer(Box::new(RecordingLayer::new("L3", &journal)), &ctx);
    let names: Vec<_> = stack.iter().map(|(_, layer)| layer.name().to_owned()).collect();
    assert_eq!(names, ["L2", "L3", "O"]);

    journal.borrow_mut().clear();
    assert!(stack.pop_overlay(o).is_some());
    assert_eq!(entries(&journal), ["O detach"]);
    assert_eq!(stack.overlay_count(), 0);
    assert!(stack.pop_layer(l2).is_some());
}

#[test]
fn popping_an_absent_id_is_a_no_op() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    let l1 = stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    let o = stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    assert!(stack.pop_layer(l1).is_some());
    journal.borrow_mut().clear();

    assert!(stack.pop_layer(l1).is_none());
    // Overlays are not reachable through pop_layer, nor layers through pop_overlay.
    assert!(stack.pop_layer(o).is_none());
    assert!(entries(&journal).is_empty());
    assert_eq!(stack.len(), 1);
}

#[test]
fn clear_and_drop_detach_the_remaining_layers_once() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    journal.borrow_mut().clear();

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(entries(&journal), ["O detach", "L1 detach"]);

    stack.push_layer(Box::new(RecordingLayer::new("L2", &journal)), &ctx);
    journal.borrow_mut().clear();
    drop(stack);
    assert_eq!(entries(&journal), ["L2 detach"]);
}

#[test]
fn ui_hooks_run_front_to_back() {
    let (journal, renderer, mut stack) = setup();
    let ctx = LayerContext {
        renderer: &renderer,
        window_size: (800, 600),
    };
    stack.push_overlay(Box::new(RecordingLayer::new("O", &journal)), &ctx);
    stack.push_layer(Box::new(RecordingLayer::new("L1", &journal)), &ctx);
    journal.borrow_mut().clear();

    let ui = egui::Context::default();
    stack.render_ui(&ui);
    assert_eq!(entries(&journal), ["L1 ui", "O ui"]);
}
