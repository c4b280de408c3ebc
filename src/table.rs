//! Half-step quadrature state table.
//!
//! The encoder rests at both `11` and `00` (one detent each). A step is only
//! reported after the pins pass through a consistent intermediate reading
//! and settle at the opposite resting position. Readings that reverse
//! mid-way fall back to a start state without reporting anything, which is
//! what absorbs contact bounce.
//!
//! Input symbols pack the two pin levels as `(pin1 << 1) | pin2`.

/// Legacy packed flag for a completed clockwise step.
pub const DIR_CW: u8 = 0x10;

/// Legacy packed flag for a completed counter-clockwise step.
pub const DIR_CCW: u8 = 0x20;

/// Mask selecting the state id from a packed table byte.
pub const STATE_MASK: u8 = 0x0F;

/// Rotation direction of a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// `+1` for clockwise, `-1` for counter-clockwise.
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    /// Packed flag bits for this direction.
    pub const fn flag(self) -> u8 {
        match self {
            Direction::Clockwise => DIR_CW,
            Direction::CounterClockwise => DIR_CCW,
        }
    }
}

/// Decoder state. Discriminants are the table row indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DecoderState {
    /// Resting at `11`.
    #[default]
    Start = 0,
    CcwBegin = 1,
    CwBegin = 2,
    /// Resting at `00`.
    StartMirror = 3,
    CwBeginMirror = 4,
    CcwBeginMirror = 5,
}

impl DecoderState {
    /// All states in table row order.
    pub const ALL: [DecoderState; 6] = [
        DecoderState::Start,
        DecoderState::CcwBegin,
        DecoderState::CwBegin,
        DecoderState::StartMirror,
        DecoderState::CwBeginMirror,
        DecoderState::CcwBeginMirror,
    ];

    /// Numeric state id (low nibble of the packed form).
    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// One cell of the transition table: the next state, plus the direction of
/// the step that completes on this transition (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub next: DecoderState,
    pub direction: Option<Direction>,
}

impl Transition {
    const fn to(next: DecoderState) -> Self {
        Self { next, direction: None }
    }

    const fn step(next: DecoderState, direction: Direction) -> Self {
        Self {
            next,
            direction: Some(direction),
        }
    }

    /// Packed byte form: low nibble state id, high nibble direction flag.
    pub const fn to_byte(self) -> u8 {
        match self.direction {
            Some(direction) => self.next.id() | direction.flag(),
            None => self.next.id(),
        }
    }
}

use DecoderState::*;
use Direction::{Clockwise as Cw, CounterClockwise as Ccw};

/// Transition table, `TRANSITION_TABLE[state][symbol]`.
pub const TRANSITION_TABLE: [[Transition; 4]; 6] = [
    // Start (11)
    [
        Transition::to(StartMirror),
        Transition::to(CwBegin),
        Transition::to(CcwBegin),
        Transition::to(Start),
    ],
    // CcwBegin
    [
        Transition::step(StartMirror, Ccw),
        Transition::to(Start),
        Transition::to(CcwBegin),
        Transition::to(Start),
    ],
    // CwBegin
    [
        Transition::step(StartMirror, Cw),
        Transition::to(CwBegin),
        Transition::to(Start),
        Transition::to(Start),
    ],
    // StartMirror (00)
    [
        Transition::to(StartMirror),
        Transition::to(CcwBeginMirror),
        Transition::to(CwBeginMirror),
        Transition::to(Start),
    ],
    // CwBeginMirror
    [
        Transition::to(StartMirror),
        Transition::to(StartMirror),
        Transition::to(CwBeginMirror),
        Transition::step(Start, Cw),
    ],
    // CcwBeginMirror
    [
        Transition::to(StartMirror),
        Transition::to(CcwBeginMirror),
        Transition::to(StartMirror),
        Transition::step(Start, Ccw),
    ],
];

/// Pack two pin levels into a 2-bit input symbol, `pin1` in the high bit.
pub const fn symbol(pin1: bool, pin2: bool) -> u8 {
    ((pin1 as u8) << 1) | pin2 as u8
}

/// Look up the transition for `state` on input `symbol`.
///
/// Only the low two bits of `symbol` are used.
pub const fn transition(state: DecoderState, symbol: u8) -> Transition {
    TRANSITION_TABLE[state as usize][(symbol & 0b11) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Packed table as a byte array, for comparison against `to_byte()`.
    const PACKED: [[u8; 4]; 6] = [
        [0x03, 0x02, 0x01, 0x00],
        [0x03 | DIR_CCW, 0x00, 0x01, 0x00],
        [0x03 | DIR_CW, 0x02, 0x00, 0x00],
        [0x03, 0x05, 0x04, 0x00],
        [0x03, 0x03, 0x04, 0x00 | DIR_CW],
        [0x03, 0x05, 0x03, 0x00 | DIR_CCW],
    ];

    #[test]
    fn symbol_packs_pin1_high() {
        assert_eq!(symbol(false, false), 0b00);
        assert_eq!(symbol(false, true), 0b01);
        assert_eq!(symbol(true, false), 0b10);
        assert_eq!(symbol(true, true), 0b11);
    }

    #[test]
    fn every_transition_lands_in_a_valid_state() {
        for state in DecoderState::ALL {
            for sym in 0..4u8 {
                let next = transition(state, sym).next;
                assert!(DecoderState::ALL.contains(&next));
                assert!(next.id() <= STATE_MASK);
            }
        }
    }

    #[test]
    fn table_matches_packed_encoding() {
        for (row, state) in DecoderState::ALL.iter().enumerate() {
            for sym in 0..4u8 {
                assert_eq!(
                    transition(*state, sym).to_byte(),
                    PACKED[row][sym as usize],
                    "state {:?} symbol {:02b}",
                    state,
                    sym
                );
            }
        }
    }

    #[test]
    fn exactly_four_cells_complete_a_step() {
        let steps = TRANSITION_TABLE
            .iter()
            .flatten()
            .filter(|t| t.direction.is_some())
            .count();
        assert_eq!(steps, 4);
    }

    #[test]
    fn steps_only_land_on_resting_states() {
        for t in TRANSITION_TABLE.iter().flatten() {
            if t.direction.is_some() {
                assert!(matches!(t.next, Start | StartMirror));
            }
        }
    }

    #[test]
    fn symbol_is_masked_to_two_bits() {
        assert_eq!(transition(Start, 0b111), transition(Start, 0b11));
    }

    #[test]
    fn direction_signs() {
        assert_eq!(Direction::Clockwise.sign(), 1);
        assert_eq!(Direction::CounterClockwise.sign(), -1);
    }
}
