//! Myers' diff algorithm, adapted from
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! The result is a shortest edit script over the token sequences, so the
//! number of non-equal tokens is minimal. Passing two large and completely
//! distinct sequences makes the middle snake search expensive; the common
//! prefix and suffix are trimmed at every level of the recursion to keep the
//! usual case of a few local edits cheap.

use std::ops::{Index, IndexMut, Range};

use crate::{
    raw_operation::RawOperation,
    tokenizer::token::Token,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Myers' diff algorithm.
///
/// Aligns the whole of `old` with the whole of `new`. The returned
/// `RawOperation`s each wrap a single token, `Equal` and `Delete` operations
/// carry tokens of `old` while `Insert` operations carry tokens of `new`.
pub fn myers_diff<'a>(old: &[Token<'a>], new: &[Token<'a>]) -> Vec<RawOperation<'a>> {
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::with_capacity(old.len().max(new.len()));

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    debug_assert!(
        result.iter().all(|op| op.tokens().len() == 1),
        "All operations must be of length 1"
    );

    result
}

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`.
///
/// `k` can be negative, so `V` wraps a Vec plus an `offset` mapping the most
/// negative `k` back to 0.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }

    fn position(&self, k: isize) -> usize {
        let idx = usize::try_from(k + self.offset).unwrap_or(0);
        idx.min(self.v.len().saturating_sub(1))
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &Self::Output { &self.v[self.position(k)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let position = self.position(k);
        &mut self.v[position]
    }
}

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

fn signed(value: usize) -> isize { isize::try_from(value).unwrap_or(isize::MAX) }

/// Finds the start of the middle snake of an optimal D-path by running the
/// basic greedy algorithm forwards from `(0, 0)` and backwards from `(N, M)`
/// at the same time, until the furthest reaching paths of the two directions
/// overlap.
///
/// A snake is a (possibly empty) run of diagonal edges in the edit graph; only
/// its start point is needed to split the problem in two.
fn find_middle_snake(
    old: &[Token<'_>],
    old_range: Range<usize>,
    new: &[Token<'_>],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = signed(n) - signed(m);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    debug_assert!(vf.len() >= d_max);
    debug_assert!(vb.len() >= d_max);

    for d in 0..signed(d_max) {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(signed(x) - k).unwrap_or(0);

            // The coordinate of the start of a snake
            let (x0, y0) = (x, y);

            // Follow the diagonal for as long as the tokens match
            if x < n && y < m {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() < d && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(signed(x) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<'a>(
    old: &[Token<'a>],
    mut old_range: Range<usize>,
    new: &[Token<'a>],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<RawOperation<'a>>,
) {
    let common_prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    result.extend(
        old[old_range.start..old_range.start + common_prefix_len]
            .iter()
            .map(|token| RawOperation::Equal(vec![*token])),
    );
    old_range.start += common_prefix_len;
    new_range.start += common_prefix_len;

    let common_suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let common_suffix_start = old_range.end - common_suffix_len;
    old_range.end -= common_suffix_len;
    new_range.end -= common_suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left between the prefix and the suffix
    } else if new_range.is_empty() {
        result.extend(
            old[old_range]
                .iter()
                .map(|token| RawOperation::Delete(vec![*token])),
        );
    } else if old_range.is_empty() {
        result.extend(
            new[new_range]
                .iter()
                .map(|token| RawOperation::Insert(vec![*token])),
        );
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        result.extend(
            old[old_range]
                .iter()
                .map(|token| RawOperation::Delete(vec![*token])),
        );
        result.extend(
            new[new_range]
                .iter()
                .map(|token| RawOperation::Insert(vec![*token])),
        );
    }

    result.extend(
        old[common_suffix_start..common_suffix_start + common_suffix_len]
            .iter()
            .map(|token| RawOperation::Equal(vec![*token])),
    );
}
