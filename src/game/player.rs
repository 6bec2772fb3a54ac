use super::board::Cell;

/// Which of the two seats a player occupies; also the symbol they drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    A,
    B,
}

impl Mark {
    /// Get the other mark
    pub fn other(self) -> Mark {
        match self {
            Mark::A => Mark::B,
            Mark::B => Mark::A,
        }
    }

    /// Convert mark to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::A => Cell::PlayerA,
            Mark::B => Cell::PlayerB,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Mark::A => 0,
            Mark::B => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Player {
            name: name.into(),
            mark,
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The cell value this player's pieces occupy
    pub fn symbol(&self) -> Cell {
        self.mark.to_cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_mark() {
        assert_eq!(Mark::A.other(), Mark::B);
        assert_eq!(Mark::B.other(), Mark::A);
    }

    #[test]
    fn test_mark_cell_roundtrip() {
        assert_eq!(Mark::A.to_cell().mark(), Some(Mark::A));
        assert_eq!(Mark::B.to_cell().mark(), Some(Mark::B));
        assert_eq!(Cell::Empty.mark(), None);
    }

    #[test]
    fn test_player_symbol() {
        let player = Player::new("player 2", Mark::B);
        assert_eq!(player.name(), "player 2");
        assert_eq!(player.symbol(), Cell::PlayerB);
    }
}
