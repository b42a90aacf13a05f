//! Game session — the client's state machine.
//!
//! DESIGN
//! ======
//! One `GameSession` owns the board, the shape tray, and every turn/color
//! flag for the lifetime of a connection. Handlers are plain methods that
//! mutate the session and return a list of [`Effect`]s; the transport
//! executes them (send a message, repaint). Handlers never touch the socket.
//!
//! LIFECYCLE
//! =========
//! 1. Connected → emit `join(name)`
//! 2. `joined` → build the board; header "Waiting..."
//! 3. `start`/`update` → assign color once, rebuild board, gate input
//! 4. `end` → freeze; header shows the result
//! 5. Close → `Closed`; fatal unless the game already ended
//!
//! Illegal local input (wrong turn, not started, repeats) is dropped at
//! trace level. Unknown server messages are dropped at warn level.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashSet;

use canvas::candidates::add_move_candidates;
use canvas::consts::{
    HUD_CENTER_X, HUD_HEADER_Y, HUD_ROW_SPACING, HUD_SWATCH_OFFSET_X, HUD_SWATCH_SIZE, MAX_BOARD_WIDTH,
};
use canvas::input::{Key, Modifiers};
use canvas::render::{Renderer, draw_board, draw_shapes};
use canvas::shapes::{Action, ShapeController};
use canvas::{Board, Cell, Point, TileKind};
use frames::{ClientMessage, CodecError, Color, EndMessage, ServerMessage, ShapeTemplate, StateMessage};
use tracing::{debug, info, trace, warn};

use crate::bridge;
use crate::error::ClientError;

pub const HEADER_JOINING: &str = "Joining...";
pub const HEADER_WAITING: &str = "Waiting...";
pub const HEADER_YOU: &str = " You:";
pub const TURN_LABEL: &str = "Turn:";

// =============================================================================
// EFFECT
// =============================================================================

/// Work a handler hands back to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send one message to the server. Fire-and-forget.
    Send(ClientMessage),
    /// Visible state changed; repaint.
    Redraw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connecting,
    /// Board built, waiting for the first snapshot.
    Joined,
    Active,
    GameOver,
    Closed,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct GameSession {
    name: String,
    phase: Phase,
    board: Option<Board>,
    moves_per_turn: u32,
    local_color: Option<Color>,
    turn: Option<Color>,
    turn_number: Option<u32>,
    moves_remaining: u32,
    started: bool,
    game_over: bool,
    opponent: Option<String>,
    /// Shape set announced on `joined`, used if the color-assigning snapshot omits it.
    announced_shapes: Option<Vec<ShapeTemplate>>,
    shapes: Option<ShapeController>,
    local_position: Cell,
    pressed: HashSet<Key>,
    header: String,
    last_ping: Option<bool>,
}

impl GameSession {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phase: Phase::Connecting,
            board: None,
            moves_per_turn: 0,
            local_color: None,
            turn: None,
            turn_number: None,
            moves_remaining: 0,
            started: false,
            game_over: false,
            opponent: None,
            announced_shapes: None,
            shapes: None,
            local_position: Cell::ABSENT,
            pressed: HashSet::new(),
            header: HEADER_JOINING.to_owned(),
            last_ping: None,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn shapes(&self) -> Option<&ShapeController> {
        self.shapes.as_ref()
    }

    #[must_use]
    pub fn moves_per_turn(&self) -> u32 {
        self.moves_per_turn
    }

    #[must_use]
    pub fn local_color(&self) -> Option<Color> {
        self.local_color
    }

    /// Derived from our color once it is assigned.
    #[must_use]
    pub fn opponent_color(&self) -> Option<Color> {
        self.local_color.map(Color::opponent)
    }

    #[must_use]
    pub fn turn(&self) -> Option<Color> {
        self.turn
    }

    #[must_use]
    pub fn turn_number(&self) -> Option<u32> {
        self.turn_number
    }

    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.moves_remaining
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn opponent(&self) -> Option<&str> {
        self.opponent.as_deref()
    }

    #[must_use]
    pub fn local_position(&self) -> Cell {
        self.local_position
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn last_ping(&self) -> Option<bool> {
        self.last_ping
    }

    /// True while the game is live and the server says it is our turn.
    #[must_use]
    pub fn is_local_turn(&self) -> bool {
        !self.game_over && self.local_color.is_some() && self.turn == self.local_color
    }

    fn can_act(&self) -> bool {
        self.started && self.is_local_turn()
    }

    // -------------------------------------------------------------------------
    // Connection events
    // -------------------------------------------------------------------------

    /// The socket is open. Announce ourselves.
    pub fn on_connected(&mut self) -> Vec<Effect> {
        if self.phase != Phase::Connecting {
            return Vec::new();
        }
        info!(name = %self.name, "session: joining");
        vec![Effect::Send(ClientMessage::Join { name: self.name.clone() })]
    }

    /// Decode and apply one inbound text frame. Bad frames are logged and dropped.
    pub fn on_text(&mut self, text: &str) -> Vec<Effect> {
        match frames::decode_message(text) {
            Ok(message) => self.handle_message(message),
            Err(CodecError::UnknownType(kind)) => {
                warn!(%kind, "session: unknown message type; dropping");
                Vec::new()
            }
            Err(error) => {
                warn!(%error, "session: undecodable message; dropping");
                Vec::new()
            }
        }
    }

    /// The connection is gone. No reconnect is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ConnectionClosed`] unless the game had already ended.
    pub fn on_closed(&mut self) -> Result<(), ClientError> {
        let was_over = self.game_over;
        self.phase = Phase::Closed;
        info!(game_over = was_over, "session: connection closed");
        if was_over { Ok(()) } else { Err(ClientError::ConnectionClosed) }
    }

    // -------------------------------------------------------------------------
    // Protocol dispatch
    // -------------------------------------------------------------------------

    pub fn handle_message(&mut self, message: ServerMessage) -> Vec<Effect> {
        debug!(kind = message.kind(), "session: inbound");
        if self.phase == Phase::Closed {
            return Vec::new();
        }
        match message {
            ServerMessage::Joined(joined) => {
                if self.phase != Phase::Connecting {
                    warn!("session: duplicate joined; dropping");
                    return Vec::new();
                }
                if joined.board_width == 0 || joined.board_width > MAX_BOARD_WIDTH {
                    warn!(board_width = joined.board_width, max = MAX_BOARD_WIDTH, "session: bad board width; dropping");
                    return Vec::new();
                }
                info!(board_width = joined.board_width, moves_per_turn = joined.moves_per_turn, "session: joined");
                self.board = Some(Board::new(joined.board_width));
                self.moves_per_turn = joined.moves_per_turn;
                self.announced_shapes = joined.shapes;
                self.header = HEADER_WAITING.to_owned();
                self.phase = Phase::Joined;
                vec![Effect::Redraw]
            }
            ServerMessage::Start(state) | ServerMessage::Update(state) => self.apply_state(state),
            ServerMessage::End(end) => self.apply_end(&end),
        }
    }

    fn apply_state(&mut self, state: StateMessage) -> Vec<Effect> {
        if self.game_over {
            debug!("session: snapshot after end; ignoring");
            return Vec::new();
        }
        if self.board.is_none() {
            warn!("session: snapshot before joined; dropping");
            return Vec::new();
        }

        if let (None, Some(color)) = (self.local_color, state.your_color) {
            self.assign_color(color, state.shapes.as_deref());
        }

        self.started = true;
        self.turn = Some(state.turn);
        self.moves_remaining = state.moves_remaining;
        if state.turn_number.is_some() {
            self.turn_number = state.turn_number;
        }
        if state.opponent.is_some() {
            self.opponent = state.opponent;
        }
        if state.ping_saw_opponent.is_some() {
            self.last_ping = state.ping_saw_opponent;
        }

        self.apply_snapshot(&state.board);

        let local_turn = self.is_local_turn();
        if let Some(shapes) = self.shapes.as_mut() {
            shapes.set_enabled(local_turn);
        }
        self.phase = Phase::Active;
        vec![Effect::Redraw]
    }

    /// Record our color and build the shape tray. Happens once per session.
    fn assign_color(&mut self, color: Color, shapes: Option<&[ShapeTemplate]>) {
        info!(color = ?color, "session: color assigned");
        self.local_color = Some(color);
        self.header = HEADER_YOU.to_owned();

        let templates = shapes.or(self.announced_shapes.as_deref()).unwrap_or_default();
        if let Some(board) = self.board.as_ref() {
            let shapes = templates.iter().map(bridge::shape).collect();
            self.shapes = Some(ShapeController::new(shapes, board.geometry(), bridge::block_tile(color)));
        }
    }

    /// Rebuild the board from a server snapshot.
    fn apply_snapshot(&mut self, snapshot: &frames::BoardSnapshot) {
        let local_turn = self.is_local_turn();
        let Some(board) = self.board.as_mut() else {
            return;
        };
        board.clear();

        let white = bridge::cell(snapshot.white_player);
        let black = bridge::cell(snapshot.black_player);
        if white == black && !white.is_absent() {
            board.set_tile(white, TileKind::PlayerBoth);
        } else {
            board.set_tile(white, bridge::player_tile(Color::White));
            board.set_tile(black, bridge::player_tile(Color::Black));
        }

        for [x, y] in &snapshot.white_block {
            board.set_tile(Cell::new(*x, *y), bridge::block_tile(Color::White));
        }
        for [x, y] in &snapshot.black_block {
            board.set_tile(Cell::new(*x, *y), bridge::block_tile(Color::Black));
        }

        self.local_position = match self.local_color {
            Some(Color::White) => white,
            Some(Color::Black) => black,
            None => Cell::ABSENT,
        };
        if local_turn {
            let count = add_move_candidates(board, self.local_position);
            trace!(count, "session: move candidates");
        }
    }

    fn apply_end(&mut self, end: &EndMessage) -> Vec<Effect> {
        if self.game_over {
            return Vec::new();
        }
        info!(result = %end.result, reason = %end.reason, "session: game over");
        self.game_over = true;
        self.phase = Phase::GameOver;
        self.header = if end.is_win() {
            format!("You Win!\n({})", end.reason)
        } else {
            format!("You Lose!\n({})", end.reason)
        };
        if let Some(shapes) = self.shapes.as_mut() {
            shapes.set_enabled(false);
        }
        vec![Effect::Redraw]
    }

    // -------------------------------------------------------------------------
    // Local input
    // -------------------------------------------------------------------------

    /// Arrow keys move, shift+arrow shoots, space pings.
    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Effect> {
        let repeat = !self.pressed.insert(key);
        if repeat || !self.can_act() {
            trace!(?key, repeat, "session: key ignored");
            return Vec::new();
        }

        let message = if key == Key::Space {
            ClientMessage::Ping
        } else if let Some(direction) = key.direction() {
            let direction = bridge::wire_direction(direction);
            if modifiers.shift {
                ClientMessage::Shoot { direction }
            } else {
                ClientMessage::Move { direction }
            }
        } else {
            return Vec::new();
        };
        debug!(?message, "session: intent");
        vec![Effect::Send(message)]
    }

    pub fn on_key_up(&mut self, key: Key) -> Vec<Effect> {
        self.pressed.remove(&key);
        Vec::new()
    }

    /// Pick up a tray shape, or else step onto a clicked move candidate.
    pub fn on_pointer_down(&mut self, point: Point) -> Vec<Effect> {
        if let Some(shapes) = self.shapes.as_mut() {
            if let Some(shape_index) = shapes.shape_at(point) {
                let actions = shapes.pick_up(shape_index, point);
                if !actions.is_empty() {
                    return self.run_actions(actions);
                }
            }
        }

        if !self.can_act() {
            return Vec::new();
        }
        let Some(direction) = self.board.as_ref().and_then(|board| board.candidate_at(point)) else {
            return Vec::new();
        };
        let message = ClientMessage::Move { direction: bridge::wire_direction(direction) };
        debug!(?message, "session: intent");
        vec![Effect::Send(message)]
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Effect> {
        let Some(shapes) = self.shapes.as_mut() else {
            return Vec::new();
        };
        let actions = shapes.drag(point);
        self.run_actions(actions)
    }

    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Effect> {
        let (Some(shapes), Some(board)) = (self.shapes.as_mut(), self.board.as_ref()) else {
            return Vec::new();
        };
        let actions = shapes.release(point, board);
        self.run_actions(actions)
    }

    /// Translate controller actions into effects.
    fn run_actions(&self, actions: Vec<Action>) -> Vec<Effect> {
        actions
            .into_iter()
            .filter_map(|action| match action {
                Action::Place { .. } if self.game_over => {
                    trace!("session: placement after end; dropping");
                    None
                }
                Action::Place { shape_index, origin } => {
                    let message = ClientMessage::Place { shape_index, origin: bridge::coord(origin) };
                    debug!(?message, "session: intent");
                    Some(Effect::Send(message))
                }
                Action::RenderNeeded => Some(Effect::Redraw),
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Paint the board, the HUD column, and the shape tray.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if let Some(board) = self.board.as_ref() {
            draw_board(renderer, board);
        }

        let header_at = Point::new(HUD_CENTER_X, HUD_HEADER_Y);
        renderer.draw_text(&self.header, header_at);
        if !self.started || self.game_over {
            return;
        }

        let swatch = |row: f64| Point::new(HUD_CENTER_X + HUD_SWATCH_OFFSET_X, HUD_HEADER_Y + row * HUD_ROW_SPACING);
        let row_at = |row: f64| Point::new(HUD_CENTER_X, HUD_HEADER_Y + row * HUD_ROW_SPACING);

        if let Some(color) = self.local_color {
            renderer.draw_tile(swatch(0.0), HUD_SWATCH_SIZE, bridge::player_tile(color), 1.0);
        }

        renderer.draw_text(TURN_LABEL, row_at(1.0));
        let (moves, mover) = if self.is_local_turn() {
            (format!("Moves: {}", self.moves_remaining), self.local_color)
        } else {
            (format!("Opponent Moves: {}", self.moves_remaining), self.opponent_color())
        };
        if let Some(color) = mover {
            renderer.draw_tile(swatch(1.0), HUD_SWATCH_SIZE, bridge::player_tile(color), 1.0);
        }
        renderer.draw_text(&moves, row_at(2.0));

        let mut row = 3.0;
        if let Some(number) = self.turn_number {
            renderer.draw_text(&format!("Turn #{number}"), row_at(row));
            row += 1.0;
        }
        if let Some(opponent) = self.opponent.as_deref() {
            renderer.draw_text(&format!("Opponent: {opponent}"), row_at(row));
            row += 1.0;
        }
        if let Some(saw) = self.last_ping {
            let status = if saw { "Ping: opponent sighted" } else { "Ping: no contact" };
            renderer.draw_text(status, row_at(row));
        }

        if let Some(shapes) = self.shapes.as_ref() {
            draw_shapes(renderer, shapes);
        }
    }
}
