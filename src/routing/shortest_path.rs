// hop count shortest paths over the fiber topology, every link weighs 1

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::dsa::path_list::PathList;
use crate::optical_network::topology::NetworkTopology;

type HashSet<K> = std::collections::hash_set::HashSet<K,nohash::BuildNoHashHasher<usize>>;

// links are stored once, lowest node first
type LinkSet = std::collections::HashSet<(usize,usize)>;

fn link(node1:usize,node2:usize) -> (usize,usize) {
    (node1.min(node2),node1.max(node2))
}

// Dijkstra from `from` to `to` that never enters `blocked_nodes` and never
// crosses `blocked_links`. Neighbours are relaxed in ascending order and only
// on a strictly shorter distance, so among equally short routes the one that
// branches towards lower node indices first is returned.
fn shortest_path_avoiding(
    topology:&NetworkTopology,
    from:usize,
    to:usize,
    blocked_nodes:&HashSet<usize>,
    blocked_links:&LinkSet
) -> Option<PathList> {
    let node_count = topology.node_count();
    if from >= node_count || to >= node_count || blocked_nodes.contains(&from) {
        return None;
    }
    let mut distance = vec![usize::MAX;node_count];
    let mut previous:Vec<Option<usize>> = vec![None;node_count];
    let mut heap = BinaryHeap::with_capacity(node_count);
    distance[from] = 0;
    heap.push(Reverse((0,from)));

    while let Some(Reverse((hops,node))) = heap.pop() {
        if hops > distance[node] {
            continue;
        }
        if node == to {
            break;
        }
        for next in topology.neighbours(node) {
            if blocked_nodes.contains(&next) || blocked_links.contains(&link(node, next)) {
                continue;
            }
            if hops + 1 < distance[next] {
                distance[next] = hops + 1;
                previous[next] = Some(node);
                heap.push(Reverse((hops + 1,next)));
            }
        }
    }

    if distance[to] == usize::MAX {
        return None;
    }
    let mut nodes = vec![to];
    let mut current = to;
    while let Some(node) = previous[current] {
        nodes.push(node);
        current = node;
    }
    nodes.reverse();
    Some(PathList::from(nodes))
}

// fewest hops between the topology's source and destination
pub fn dijkstra(topology:&NetworkTopology) -> Option<PathList> {
    shortest_path_avoiding(
        topology,
        topology.source(),
        topology.destination(),
        &HashSet::default(),
        &LinkSet::new()
    )
}

// Yen's algorithm: up to `k` loopless source -> destination routes, fewest hops
// first, ties broken by node sequence. Each new route deviates from an already
// accepted one at a spur node, the shared root is fixed and every link the
// accepted routes take out of that root is removed before searching the spur.
pub fn yen(topology:&NetworkTopology,k:usize) -> Vec<PathList> {
    let mut accepted:Vec<PathList> = Vec::with_capacity(k);
    if k == 0 {
        return accepted;
    }
    let Some(first) = dijkstra(topology) else {
        return accepted;
    };
    accepted.push(first);
    let mut candidates:Vec<PathList> = vec![];

    while accepted.len() < k {
        let Some(last) = accepted.last() else { break };
        let last = last.clone();
        for spur_index in 0..last.hops() {
            let root = last.slice(0..spur_index + 1);
            let spur_node = last.as_slice()[spur_index];

            let mut blocked_links = LinkSet::new();
            for route in accepted.iter() {
                if route.len() > spur_index + 1 && route.slice(0..spur_index + 1) == root {
                    let nodes = route.as_slice();
                    blocked_links.insert(link(nodes[spur_index], nodes[spur_index + 1]));
                }
            }
            let blocked_nodes:HashSet<usize> = root.iter().take(spur_index).collect();

            let Some(spur) = shortest_path_avoiding(
                topology, spur_node, topology.destination(), &blocked_nodes, &blocked_links
            ) else {
                continue;
            };
            let candidate = root.slice(0..spur_index).concat(&spur);
            if !accepted.contains(&candidate) && !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }

        let best = candidates.iter().enumerate()
            .min_by(|(_,a),(_,b)| a.len().cmp(&b.len()).then_with(|| a.as_slice().cmp(b.as_slice())))
            .map(|(index,_)| index);
        let Some(best) = best else {
            trace!(found = accepted.len(), wanted = k, "no more loopless routes");
            break;
        };
        accepted.push(candidates.swap_remove(best));
    }
    accepted
}
