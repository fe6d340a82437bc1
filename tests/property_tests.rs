//! Property-based tests over random digit orders and placements.

use proptest::prelude::*;

use numtac::{GameConfig, GameEngine, MoveError, Phase, Player, SymbolSearch};

/// A random order to select the digits 1-9.
fn digit_order() -> impl Strategy<Value = Vec<u8>> {
    Just((1u8..=9).collect::<Vec<u8>>()).prop_shuffle()
}

/// A random order to fill the nine cells.
fn cell_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0usize..9).collect::<Vec<usize>>()).prop_shuffle()
}

/// Run a full numbers phase, returning the engine and the player who
/// placed each digit in order.
fn play_numbers(digits: &[u8], cells: &[usize]) -> (GameEngine, Vec<Player>) {
    let mut engine = GameEngine::new(GameConfig::default());
    let mut placers = Vec::with_capacity(9);
    for (&digit, &cell) in digits.iter().zip(cells) {
        placers.push(engine.state().current_player());
        engine.select_number(digit).unwrap();
        engine.place_number(cell).unwrap();
    }
    (engine, placers)
}

proptest! {
    /// Any complete numbers phase transitions exactly once, fills the
    /// used set, and hands the opening symbol move to the player who
    /// did not place the ninth digit.
    #[test]
    fn numbers_phase_transitions_exactly_once(
        digits in digit_order(),
        cells in cell_order(),
    ) {
        let mut engine = GameEngine::new(GameConfig::default());
        let mut transitions = 0;
        let mut last_placer = None;

        for (&digit, &cell) in digits.iter().zip(&cells) {
            let placer = engine.state().current_player();
            prop_assert!(engine.select_number(digit).is_ok());
            let outcome = engine.place_number(cell).unwrap();
            if outcome.phase_changed {
                transitions += 1;
                last_placer = Some(placer);
            }
        }

        prop_assert_eq!(transitions, 1);
        prop_assert!(engine.state().used_numbers().is_full());
        prop_assert_eq!(engine.state().phase(), Phase::Symbols);

        let placer = last_placer.unwrap();
        prop_assert_eq!(engine.state().last_number_placer(), Some(placer));
        prop_assert_eq!(engine.state().current_player(), placer.other());
    }

    /// Re-selecting an already placed digit always fails, and the
    /// failure mutates nothing.
    #[test]
    fn used_digits_cannot_be_reselected(
        digits in digit_order(),
        cells in cell_order(),
        steps in 1usize..9,
    ) {
        let mut engine = GameEngine::new(GameConfig::default());
        for (&digit, &cell) in digits.iter().zip(&cells).take(steps) {
            engine.select_number(digit).unwrap();
            engine.place_number(cell).unwrap();
        }

        let before = *engine.state();
        for &digit in digits.iter().take(steps) {
            prop_assert_eq!(
                engine.select_number(digit),
                Err(MoveError::InvalidNumberSelection)
            );
        }
        prop_assert_eq!(*engine.state(), before);
    }

    /// Placing onto an occupied cell is a no-op, wherever it happens.
    #[test]
    fn occupied_cells_reject_without_mutation(
        digits in digit_order(),
        cells in cell_order(),
        steps in 1usize..9,
    ) {
        let (taken, rest) = {
            let mut engine = GameEngine::new(GameConfig::default());
            for (&digit, &cell) in digits.iter().zip(&cells).take(steps) {
                engine.select_number(digit).unwrap();
                engine.place_number(cell).unwrap();
            }
            (engine, &cells[..steps])
        };

        let mut engine = taken;
        engine.select_number(digits[steps]).unwrap();
        let before = *engine.state();
        for &cell in rest {
            prop_assert_eq!(engine.place_number(cell), Err(MoveError::CellOccupied));
        }
        prop_assert_eq!(*engine.state(), before);
    }

    /// Whatever the digit layout, the first symbol placement succeeds
    /// only on the cell holding digit 1.
    #[test]
    fn first_symbol_move_must_cover_digit_one(
        digits in digit_order(),
        cells in cell_order(),
    ) {
        let (mut engine, _) = play_numbers(&digits, &cells);
        let digit_one_cell = engine.state().number_grid().position_of(1).unwrap();

        for cell in 0..9 {
            if cell == digit_one_cell {
                continue;
            }
            prop_assert_eq!(
                engine.place_symbol(cell),
                Err(MoveError::FirstMoveViolation)
            );
            prop_assert!(engine.state().symbol_grid().is_empty());
        }

        prop_assert!(engine.place_symbol(digit_one_cell).is_ok());
    }

}

proptest! {
    // Exhaustive search per move; keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Self-play with the exhaustive search stays legal and finishes,
    /// and a tie always accounts for all 45 digit points.
    #[test]
    fn search_self_play_is_legal_and_terminal(
        digits in digit_order(),
        cells in cell_order(),
    ) {
        let (mut engine, _) = play_numbers(&digits, &cells);
        let mut search = SymbolSearch::new();

        let mut marks = 0;
        while engine.state().is_active() {
            let cell = search.choose(engine.state()).unwrap();
            prop_assert!(engine.place_symbol(cell).is_ok());
            marks += 1;
            prop_assert!(marks <= 9);
        }

        if engine.state().symbol_grid().is_full()
            && engine.state().symbol_grid().winning_line().is_none()
        {
            let scores = engine.calculate_scores();
            prop_assert_eq!(scores.player_one + scores.player_two, 45);
        }
    }
}
