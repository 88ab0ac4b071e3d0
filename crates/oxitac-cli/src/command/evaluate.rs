use oxitac_engine::Board;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Board cells in row order, e.g. "XXX/O.O/..." (X, O, and . for blank)
    board: Board,
}

pub(crate) fn run(arg: &EvaluateArg) {
    print!("{}", describe(&arg.board));
}

fn describe(board: &Board) -> String {
    let disabled = (0..Board::CELL_COUNT)
        .filter(|&cell| board.is_disabled(cell))
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>();

    let disabled = if disabled.is_empty() {
        "none".to_owned()
    } else {
        disabled.join(", ")
    };
    format!(
        "{board}\n\nState:          {}\nDisabled cells: {disabled}\n",
        board.game_state()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_x_win_disables_everything() {
        let text = describe(&"XXX/O.O/...".parse().unwrap());
        assert!(text.contains("State:          x-win"));
        assert!(text.contains("Disabled cells: 0, 1, 2, 3, 4, 5, 6, 7, 8"));
    }

    #[test]
    fn test_describe_in_progress() {
        let text = describe(&"X../.O./...".parse().unwrap());
        assert!(text.contains("State:          still-playing"));
        assert!(text.contains("Disabled cells: 0, 4\n"));
    }

    #[test]
    fn test_describe_empty_board() {
        let text = describe(&Board::new());
        assert!(text.contains("Disabled cells: none"));
    }
}
