// ordered node sequence, source first, destination last
// value semantics: slicing and concatenation always copy

use std::ops::Range;

#[derive(Clone,Default,PartialEq,Eq,Hash)]
pub struct PathList {
    nodes:Vec<usize>
}

impl PathList {
    pub fn new() -> Self {
        Self {nodes:vec![]}
    }
    pub fn with_capacity(capacity:usize) -> Self {
        Self {nodes:Vec::with_capacity(capacity)}
    }
    pub fn push(&mut self,node:usize) {
        self.nodes.push(node);
    }
    pub fn pop(&mut self) -> Option<usize> {
        self.nodes.pop()
    }
    pub fn contains(&self,node:usize) -> bool {
        self.nodes.contains(&node)
    }
    // index of the first occurrence
    pub fn position(&self,node:usize) -> Option<usize> {
        self.nodes.iter().position(|n| *n == node)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
    pub fn first(&self) -> Option<usize> {
        self.nodes.first().copied()
    }
    pub fn last(&self) -> Option<usize> {
        self.nodes.last().copied()
    }
    pub fn get(&self,index:usize) -> Option<usize> {
        self.nodes.get(index).copied()
    }
    pub fn as_slice(&self) -> &[usize] {
        &self.nodes
    }
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.nodes.iter().copied()
    }
    // sub-sequence copy, the range is clamped to the path
    pub fn slice(&self,range:Range<usize>) -> Self {
        let end = range.end.min(self.nodes.len());
        let start = range.start.min(end);
        Self {nodes:self.nodes[start..end].to_vec()}
    }
    pub fn concat(&self,tail:&Self) -> Self {
        let mut nodes = Vec::with_capacity(self.len() + tail.len());
        nodes.extend_from_slice(&self.nodes);
        nodes.extend_from_slice(&tail.nodes);
        Self {nodes}
    }
    // consecutive (u,v) pairs, one per fiber link
    pub fn links(&self) -> impl Iterator<Item = (usize,usize)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0],pair[1]))
    }
    // cuts every cycle out of a walk: when a node comes back, everything after its
    // first visit is dropped, so the result is a simple path with the same endpoints
    pub fn erase_loops(&self) -> Self {
        let mut nodes:Vec<usize> = Vec::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            match nodes.iter().position(|n| n == node) {
                Some(index) => nodes.truncate(index + 1),
                None => nodes.push(*node)
            }
        }
        Self {nodes}
    }
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity_and_hasher(
            self.nodes.len(),
            nohash::BuildNoHashHasher::<usize>::default()
        );
        self.nodes.iter().all(|n| seen.insert(*n))
    }
}

impl From<Vec<usize>> for PathList {
    fn from(nodes: Vec<usize>) -> Self {
        Self {nodes}
    }
}

impl From<&[usize]> for PathList {
    fn from(nodes: &[usize]) -> Self {
        Self {nodes:nodes.to_vec()}
    }
}

impl<const N:usize> From<[usize;N]> for PathList {
    fn from(nodes: [usize;N]) -> Self {
        Self {nodes:nodes.to_vec()}
    }
}

impl FromIterator<usize> for PathList {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {nodes:iter.into_iter().collect()}
    }
}

impl<'a> IntoIterator for &'a PathList {
    type IntoIter = std::iter::Copied<std::slice::Iter<'a,usize>>;
    type Item = usize;
    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

impl std::fmt::Debug for PathList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.nodes.iter()).finish()
    }
}

impl std::fmt::Display for PathList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i,node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f," -> ")?;
            }
            write!(f,"{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PathList;

    #[test]
    fn test_basic() {
        let mut path = PathList::new();
        assert_eq!(path.hops(),0);
        for node in [0,1,3,4,9,12] {
            path.push(node);
        }
        assert_eq!(path.len(),6);
        assert_eq!(path.hops(),5);
        assert_eq!(path.first(),Some(0));
        assert_eq!(path.last(),Some(12));
        assert!(path.contains(9));
        assert!(!path.contains(7));
        assert_eq!(path.position(4),Some(3));
        assert_eq!(path.pop(),Some(12));
        assert_eq!(path.len(),5);
    }
    #[test]
    fn test_slice_and_concat() {
        let path = PathList::from([0,2,8,9,12]);
        let head = path.slice(0..2);
        let tail = path.slice(2..path.len());
        assert_eq!(head,PathList::from([0,2]));
        assert_eq!(tail,PathList::from([8,9,12]));
        assert_eq!(head.concat(&tail),path);
        assert_eq!(path.slice(3..100),PathList::from([9,12]));
        assert!(path.slice(7..9).is_empty());
    }
    #[test]
    fn test_links_and_simplicity() {
        let path = PathList::from([0,1,3]);
        let links:Vec<_> = path.links().collect();
        assert_eq!(links,vec![(0,1),(1,3)]);
        assert!(path.is_simple());
        assert!(!PathList::from([0,1,0,3]).is_simple());
        assert_eq!(path.to_string(),"0 -> 1 -> 3");
    }
    #[test]
    fn test_erase_loops() {
        let walk = PathList::from([0,1,3,4,1,2,12]);
        assert_eq!(walk.erase_loops(),PathList::from([0,1,2,12]));
        let walk = PathList::from([0,5,6,5,6,7,12]);
        assert_eq!(walk.erase_loops(),PathList::from([0,5,6,7,12]));
        let simple = PathList::from([0,2,8]);
        assert_eq!(simple.erase_loops(),simple);
    }
}
