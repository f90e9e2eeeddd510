use super::util::Float;

/// Index of the largest value, scanning left to right.
///
/// An index only replaces the current best when its value is strictly greater,
/// so ties resolve to the earliest index. Returns `None` for an empty input.
pub fn argmax<'a, I>(vals: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Float>,
{
    let mut out: Option<(usize, Float)> = None;

    for (idx, val) in vals.into_iter().enumerate() {
        match out {
            None => out = Some((idx, *val)),
            Some((_, best)) if *val > best => out = Some((idx, *val)),
            _ => {}
        }
    }

    out.map(|(idx, _)| idx)
}
