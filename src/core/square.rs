/// A board square, `file` and `rank` both in `1..=8`.
///
/// Construction outside the board is a contract violation and panics; callers that read
/// untrusted text go through [`crate::notation`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    #[inline]
    pub fn new(file: u8, rank: u8) -> Self {
        assert!(
            Self::on_board(file as i32, rank as i32),
            "square ({file}, {rank}) is off the board"
        );
        Self { file, rank }
    }

    /// Like [`Square::new`], but returns `None` off the board.
    #[inline]
    pub fn checked(file: i32, rank: i32) -> Option<Self> {
        if Self::on_board(file, rank) {
            Some(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    fn on_board(file: i32, rank: i32) -> bool {
        (1..=8).contains(&file) && (1..=8).contains(&rank)
    }

    #[inline]
    pub fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Dense index `0..64`, rank-major from a1.
    #[inline]
    pub fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < 64, "square index {idx} out of range");
        Self {
            file: (idx % 8) as u8 + 1,
            rank: (idx / 8) as u8 + 1,
        }
    }

    /// Reflection across the vertical axis between the d and e files.
    #[inline]
    pub fn mirrored(self) -> Self {
        Self {
            file: 9 - self.file,
            rank: self.rank,
        }
    }

    /// All 64 squares, a1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}
