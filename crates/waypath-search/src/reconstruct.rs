/// Walk back-pointers from `end` to the root of the search tree.
///
/// Returns the chain in root → `end` order. The walk stops after `limit`
/// nodes, so a corrupted (cyclic) parent chain cannot loop forever.
pub fn reconstruct(
    end: usize,
    limit: usize,
    parent: impl Fn(usize) -> Option<usize>,
) -> Vec<usize> {
    let mut path = vec![end];
    let mut cur = end;
    while path.len() < limit {
        let Some(p) = parent(cur) else {
            break;
        };
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}
