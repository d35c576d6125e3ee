//! Tests for generation stepping, wraparound and grid handling

#[cfg(test)]
mod tests {
    use caposters::automaton::simulation::{next_generation, wraparound_padded};
    use caposters::automaton::{CellCoord, Grid, Row, Rule, TransitionTable, simulate};

    fn table(rule: u64) -> TransitionTable {
        TransitionTable::derive(&Rule::from(rule)).expect("rule should decode")
    }

    fn row(bits: &str) -> Row {
        bits.parse().expect("valid bit string")
    }

    fn bits(padded: &bitvec::slice::BitSlice) -> String {
        padded
            .iter()
            .by_vals()
            .map(|cell| if cell { '1' } else { '0' })
            .collect()
    }

    // Tests one rule 30 step from a single cell
    // Verified by swapping left and right neighbors
    #[test]
    fn test_rule_30_single_step() {
        assert_eq!(next_generation(&row("00100"), &table(30)).to_string(), "01110");
    }

    // Tests the first generations of rule 30 on seven cells
    // Verified by dropping the wraparound padding
    #[test]
    fn test_rule_30_fixture() {
        let rows: Vec<String> = simulate(row("0001000"), &table(30), 3)
            .map(|row| row.to_string())
            .collect();
        assert_eq!(rows, ["0001000", "0011100", "0110010", "1101111"]);
    }

    // Tests cells at the edges see the opposite edge
    // Verified by padding with dead cells
    #[test]
    fn test_wraparound_boundary() {
        assert_eq!(next_generation(&row("10000"), &table(30)).to_string(), "11001");
    }

    // Tests padding for the classical neighborhood
    // Verified by swapping the left and right padding
    #[test]
    fn test_padding_three_cells() {
        assert_eq!(bits(&wraparound_padded(&row("10110"), 3)), "0101101");
    }

    // Tests asymmetric padding for even neighborhoods
    // Verified by padding both sides equally
    #[test]
    fn test_padding_four_cells() {
        assert_eq!(bits(&wraparound_padded(&row("10110"), 4)), "10101101");
    }

    // Tests rows narrower than the neighborhood wrap repeatedly
    // Verified by clamping indices instead of wrapping
    #[test]
    fn test_padding_narrow_row() {
        assert_eq!(bits(&wraparound_padded(&row("10"), 5)), "101010");
        assert_eq!(next_generation(&row("1"), &table(30)).to_string(), "0");
    }

    // Tests the widened neighborhood reaches two cells to the left
    // Verified by centering even neighborhoods to the right
    #[test]
    fn test_rule_256_step() {
        let table = table(256);
        assert_eq!(next_generation(&row("00100"), &table).to_string(), "00001");
    }

    // Tests rule 0 kills every cell
    // Verified by keeping the initial row
    #[test]
    fn test_rule_0_dies_out() {
        let rows: Vec<Row> = simulate(row("0110110"), &table(0), 2).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().skip(1).all(|row| row.living_count() == 0));
    }

    // Tests the iterator yields generations plus one rows
    // Verified by yielding only the computed generations
    #[test]
    fn test_simulate_length() {
        let table = table(90);
        let generations = simulate(row("00100"), &table, 4);
        assert_eq!(generations.len(), 5);
        assert_eq!(generations.count(), 5);

        let only_initial: Vec<Row> = simulate(row("00100"), &table, 0).collect();
        assert_eq!(only_initial, vec![row("00100")]);
    }

    // Tests every row keeps the initial width
    // Verified by trimming padding cells unevenly
    #[test]
    fn test_width_preserved() {
        let grid: Grid = simulate(row("0000000100000"), &table(65_536), 10).collect();
        assert_eq!(grid.len(), 11);
        assert!(grid.rows().iter().all(|r| r.width() == 13));
    }

    // Tests discarding zero generations changes nothing
    // Verified by always dropping the initial row
    #[test]
    fn test_discard_zero_is_identity() {
        let grid: Grid = simulate(row("0001000"), &table(30), 3).collect();
        let kept = Grid::from_generations(simulate(row("0001000"), &table(30), 3), 0);
        assert_eq!(kept, grid);
    }

    // Tests discarding keeps the later generations intact
    // Verified by restarting the simulation after the discard
    #[test]
    fn test_discard_generations() {
        let shown = Grid::from_generations(simulate(row("0001000"), &table(30), 3), 2);
        let rows: Vec<String> = shown.rows().iter().map(ToString::to_string).collect();
        assert_eq!(rows, ["0110010", "1101111"]);

        let emptied = Grid::from_generations(simulate(row("0001000"), &table(30), 3), 10);
        assert!(emptied.is_empty());
        assert_eq!(emptied.width(), 0);
    }

    // Tests skipped generations are still stepped through but never kept
    // Verified by collecting every row before dropping the prefix
    #[test]
    fn test_discarded_rows_not_stored() {
        let mut consumed = 0;
        let rule = table(30);
        let rows = simulate(row("0001000"), &rule, 1_000).inspect(|_| consumed += 1);
        let shown = Grid::from_generations(rows, 998);

        assert_eq!(consumed, 1_001);
        assert_eq!(shown.len(), 3);

        let full: Grid = simulate(row("0001000"), &table(30), 1_000).collect();
        assert_eq!(full.rows().get(998..), Some(shown.rows()));
    }

    // Tests living cell coordinates and the dense copy agree
    // Verified by swapping row and column in the array
    #[test]
    fn test_living_cells_and_array() {
        let grid: Grid = simulate(row("00100"), &table(30), 1).collect();
        let living: Vec<CellCoord> = grid.living_cells().collect();
        assert_eq!(
            living,
            vec![
                CellCoord { column: 2, row: 0 },
                CellCoord { column: 1, row: 1 },
                CellCoord { column: 2, row: 1 },
                CellCoord { column: 3, row: 1 },
            ]
        );

        let array = grid.to_array();
        assert_eq!(array.dim(), (2, 5));
        assert_eq!(array.get([0, 2]), Some(&true));
        assert_eq!(array.get([1, 0]), Some(&false));
        assert_eq!(array.iter().filter(|&&cell| cell).count(), 4);
    }
}
