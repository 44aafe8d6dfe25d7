//! Drag-and-drop gesture state machines for the tree list.
//!
//! The machines own no timers and touch no tree. They consume input events
//! and return [`GestureEffect`]s which the caller carries out: arming and
//! cancelling the long-press timer, haptic feedback and finally the move,
//! usually via [`crate::apply_drop`].

use crate::{DropTarget, HoveredRow, resolve_drop_target};
use log::{debug, trace};
use std::time::Duration;

/// How long a touch must rest before it turns into a drag.
pub const LONG_PRESS_DELAY: Duration = Duration::from_millis(500);

/// Vertical movement in pixels that cancels a pending long press.
pub const MOVE_TOLERANCE: f64 = 10.0;

/// Identifies one armed timer. A firing whose token no longer matches the
/// pending press is stale and ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum GestureState {
	Idle,
	PendingLongPress {
		item_id: String,
		start_y: f64,
		timer: TimerToken,
	},
	Dragging {
		item_id: String,
		target: Option<DropTarget>,
	},
}

#[derive(Clone, Debug, PartialEq)]
pub enum GestureEffect {
	ArmTimer { token: TimerToken, delay: Duration },
	CancelTimer { token: TimerToken },
	Haptic,
	Move { source_id: String, target: DropTarget },
}

/// Touch dragging: Idle → PendingLongPress → Dragging → Idle.
#[derive(Clone, Debug)]
pub struct TouchDragGesture {
	state: GestureState,
	next_token: u64,
}

impl Default for TouchDragGesture {
	fn default() -> Self {
		Self::new()
	}
}

impl TouchDragGesture {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: GestureState::Idle,
			next_token: 0,
		}
	}

	#[must_use]
	pub fn state(&self) -> &GestureState {
		&self.state
	}

	#[must_use]
	pub fn is_dragging(&self) -> bool {
		matches!(self.state, GestureState::Dragging { .. })
	}

	fn arm(&mut self, item_id: &str, start_y: f64, effects: &mut Vec<GestureEffect>) {
		let token = TimerToken(self.next_token);
		self.next_token += 1;
		self.state = GestureState::PendingLongPress {
			item_id: item_id.to_string(),
			start_y,
			timer: token,
		};
		effects.push(GestureEffect::ArmTimer {
			token,
			delay: LONG_PRESS_DELAY,
		});
	}

	/// A finger touches the row of `item_id`.
	///
	/// A second touch while a press is pending restarts the press on the new
	/// item. A touch during a drag is ignored.
	pub fn touch_start(&mut self, item_id: &str, y: f64) -> Vec<GestureEffect> {
		let mut effects = Vec::new();
		match &self.state {
			GestureState::Idle => self.arm(item_id, y, &mut effects),
			GestureState::PendingLongPress { timer, .. } => {
				effects.push(GestureEffect::CancelTimer { token: *timer });
				self.arm(item_id, y, &mut effects);
			}
			GestureState::Dragging { .. } => trace!("touch_start ignored while dragging"),
		}
		effects
	}

	/// The finger moved to `y`; `hovered` is the row under it, if any.
	pub fn touch_move(&mut self, y: f64, hovered: Option<&HoveredRow>) -> Vec<GestureEffect> {
		match &mut self.state {
			GestureState::Idle => Vec::new(),
			GestureState::PendingLongPress { start_y, timer, .. } => {
				if (y - *start_y).abs() > MOVE_TOLERANCE {
					let token = *timer;
					self.state = GestureState::Idle;
					vec![GestureEffect::CancelTimer { token }]
				} else {
					Vec::new()
				}
			}
			GestureState::Dragging { item_id, target } => {
				match hovered {
					None => *target = None,
					Some(row) => {
						if let Some(resolved) = resolve_drop_target(item_id, row, y) {
							*target = Some(resolved);
						}
					}
				}
				Vec::new()
			}
		}
	}

	/// The timer identified by `token` elapsed.
	pub fn timer_fired(&mut self, token: TimerToken) -> Vec<GestureEffect> {
		match &self.state {
			GestureState::PendingLongPress { item_id, timer, .. } if *timer == token => {
				debug!("long press on '{item_id}' starts a drag");
				self.state = GestureState::Dragging {
					item_id: item_id.clone(),
					target: None,
				};
				vec![GestureEffect::Haptic]
			}
			_ => {
				trace!("stale timer {token:?} ignored");
				Vec::new()
			}
		}
	}

	/// The finger left the screen. Completes a drag that has a target.
	pub fn touch_end(&mut self) -> Vec<GestureEffect> {
		match std::mem::replace(&mut self.state, GestureState::Idle) {
			GestureState::Idle => Vec::new(),
			GestureState::PendingLongPress { timer, .. } => vec![GestureEffect::CancelTimer { token: timer }],
			GestureState::Dragging { item_id, target } => match target {
				Some(target) => vec![GestureEffect::Move {
					source_id: item_id,
					target,
				}],
				None => Vec::new(),
			},
		}
	}

	/// The system aborted the touch. Nothing is moved.
	pub fn touch_cancel(&mut self) -> Vec<GestureEffect> {
		match std::mem::replace(&mut self.state, GestureState::Idle) {
			GestureState::PendingLongPress { timer, .. } => vec![GestureEffect::CancelTimer { token: timer }],
			GestureState::Idle | GestureState::Dragging { .. } => Vec::new(),
		}
	}
}

/// Mouse dragging, without the long-press gate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MouseDrag {
	dragged: Option<String>,
	target: Option<DropTarget>,
}

impl MouseDrag {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn drag_start(&mut self, item_id: &str) {
		self.dragged = Some(item_id.to_string());
		self.target = None;
	}

	#[must_use]
	pub fn dragged(&self) -> Option<&str> {
		self.dragged.as_deref()
	}

	#[must_use]
	pub fn target(&self) -> Option<&DropTarget> {
		self.target.as_ref()
	}

	/// Updates the target while the pointer is over `hovered`. Hovering the
	/// dragged item keeps the previous target.
	pub fn drag_over(&mut self, hovered: &HoveredRow, y: f64) {
		let Some(dragged) = &self.dragged else {
			return;
		};
		if let Some(target) = resolve_drop_target(dragged, hovered, y) {
			self.target = Some(target);
		}
	}

	/// Ends the drag, returning the source and target to move if both exist.
	pub fn drop(&mut self) -> Option<(String, DropTarget)> {
		let dragged = self.dragged.take();
		let target = self.target.take();
		dragged.zip(target)
	}

	/// Ends the drag without moving anything.
	pub fn drag_end(&mut self) {
		self.dragged = None;
		self.target = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{DropPosition, ItemKind, RowBounds};
	use pretty_assertions::assert_eq;

	fn armed_token(effects: &[GestureEffect]) -> TimerToken {
		match effects.last() {
			Some(GestureEffect::ArmTimer { token, delay }) => {
				assert_eq!(*delay, LONG_PRESS_DELAY);
				*token
			}
			other => panic!("expected ArmTimer, got {other:?}"),
		}
	}

	fn node_row(id: &str) -> HoveredRow {
		HoveredRow::new(id, ItemKind::Node, RowBounds::new(100.0, 40.0))
	}

	#[test]
	fn long_press_then_drop_moves() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 10.0));
		assert!(matches!(gesture.state(), GestureState::PendingLongPress { .. }));

		assert!(gesture.touch_move(15.0, None).is_empty());
		assert_eq!(gesture.timer_fired(token), vec![GestureEffect::Haptic]);
		assert!(gesture.is_dragging());

		gesture.touch_move(120.0, Some(&node_row("n1")));
		assert_eq!(
			gesture.touch_end(),
			vec![GestureEffect::Move {
				source_id: String::from("a"),
				target: DropTarget::new("n1", DropPosition::Inside),
			}]
		);
		assert_eq!(gesture.state(), &GestureState::Idle);
	}

	#[test]
	fn movement_before_timer_cancels() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 10.0));
		assert_eq!(gesture.touch_move(20.5, None), vec![GestureEffect::CancelTimer { token }]);
		assert_eq!(gesture.state(), &GestureState::Idle);

		// the cancelled timer firing late must not start a drag
		assert!(gesture.timer_fired(token).is_empty());
		assert_eq!(gesture.state(), &GestureState::Idle);
	}

	#[test]
	fn release_before_timer_cancels() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 10.0));
		assert_eq!(gesture.touch_end(), vec![GestureEffect::CancelTimer { token }]);
		assert!(gesture.timer_fired(token).is_empty());
	}

	#[test]
	fn second_touch_rearms() {
		let mut gesture = TouchDragGesture::new();
		let first = armed_token(&gesture.touch_start("a", 10.0));
		let effects = gesture.touch_start("b", 50.0);
		assert_eq!(effects[0], GestureEffect::CancelTimer { token: first });
		let second = armed_token(&effects);
		assert_ne!(first, second);

		assert!(gesture.timer_fired(first).is_empty());
		assert_eq!(gesture.timer_fired(second), vec![GestureEffect::Haptic]);
		assert_eq!(
			gesture.state(),
			&GestureState::Dragging {
				item_id: String::from("b"),
				target: None,
			}
		);
	}

	#[test]
	fn touch_during_drag_is_ignored() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 0.0));
		gesture.timer_fired(token);
		assert!(gesture.touch_start("b", 0.0).is_empty());
		assert!(gesture.is_dragging());
	}

	#[test]
	fn drag_without_target_moves_nothing() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 0.0));
		gesture.timer_fired(token);
		gesture.touch_move(105.0, Some(&node_row("n1")));
		gesture.touch_move(300.0, None);
		assert!(gesture.touch_end().is_empty());
	}

	#[test]
	fn hovering_dragged_item_keeps_target() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 0.0));
		gesture.timer_fired(token);
		gesture.touch_move(101.0, Some(&node_row("n1")));
		gesture.touch_move(120.0, Some(&node_row("a")));
		assert_eq!(
			gesture.touch_end(),
			vec![GestureEffect::Move {
				source_id: String::from("a"),
				target: DropTarget::new("n1", DropPosition::Before),
			}]
		);
	}

	#[test]
	fn cancel_never_moves() {
		let mut gesture = TouchDragGesture::new();
		let token = armed_token(&gesture.touch_start("a", 0.0));
		assert_eq!(gesture.touch_cancel(), vec![GestureEffect::CancelTimer { token }]);

		let token = armed_token(&gesture.touch_start("a", 0.0));
		gesture.timer_fired(token);
		gesture.touch_move(120.0, Some(&node_row("n1")));
		assert!(gesture.touch_cancel().is_empty());
		assert_eq!(gesture.state(), &GestureState::Idle);
	}

	#[test]
	fn mouse_drag_and_drop() {
		let mut drag = MouseDrag::new();
		drag.drag_over(&node_row("n1"), 120.0);
		assert_eq!(drag.target(), None);

		drag.drag_start("a");
		drag.drag_over(&node_row("n1"), 139.0);
		drag.drag_over(&node_row("a"), 120.0);
		assert_eq!(drag.target(), Some(&DropTarget::new("n1", DropPosition::After)));
		assert_eq!(
			drag.drop(),
			Some((String::from("a"), DropTarget::new("n1", DropPosition::After)))
		);
		assert_eq!(drag, MouseDrag::default());
	}

	#[test]
	fn mouse_drag_end_resets() {
		let mut drag = MouseDrag::new();
		drag.drag_start("a");
		drag.drag_over(&node_row("n1"), 120.0);
		drag.drag_end();
		assert_eq!(drag.dragged(), None);
		assert_eq!(drag.drop(), None);
	}
}
