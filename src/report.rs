//! Plain-text reports for the editor's result panel
//!
//! Columns are tab-separated and unreachable distances render as `∞`.

use netroute_algorithms::{Distance, DijkstraTrace, DistanceVectorTable, TraceCell};
use std::fmt::Write;

/// Step table of a Dijkstra run.
///
/// One column per non-source node. A cell reads `distance,predecessor` while
/// the node is unsettled with a finite distance, `∞` before any path is
/// known, and is left empty once the node is settled.
pub fn format_dijkstra(trace: &DijkstraTrace) -> String {
    let mut out = String::from("Step\tN'");
    for node in &trace.columns {
        let _ = write!(out, "\tD({node}),p({node})");
    }
    out.push('\n');

    for step in &trace.steps {
        let settled: Vec<String> = step.settled.iter().map(|n| n.to_string()).collect();
        let _ = write!(out, "{}\t{}", step.step, settled.join(","));
        for cell in &step.cells {
            out.push('\t');
            match cell {
                TraceCell::Settled => {}
                TraceCell::Unreachable => out.push_str(&Distance::Infinite.to_string()),
                TraceCell::Tentative { distance, via } => {
                    let _ = write!(out, "{distance},{via}");
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Single-source distance table followed by the full routing table
pub fn format_distance_vector(source_distances: &[Distance], table: &DistanceVectorTable) -> String {
    let mut out = String::from("Vertex \t Distance from Source \n");
    for (node, distance) in source_distances.iter().enumerate() {
        let _ = writeln!(out, "{node} \t\t {distance}");
    }

    out.push_str("\nDistance Vector Routing Table\n\n \t");
    for node in &table.nodes {
        let _ = write!(out, "{node}\t");
    }
    out.push('\n');

    for &from in &table.nodes {
        let _ = write!(out, "{from}\t");
        for &to in &table.nodes {
            let _ = write!(out, "{}\t", table.distance(from, to));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use netroute_algorithms::{distance_vector, shortest_paths, AdjacencyMatrix};

    fn line() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(vec![vec![0, 2, 0], vec![2, 0, 3], vec![0, 3, 0]]).unwrap()
    }

    #[test]
    fn test_dijkstra_report() {
        let result = shortest_paths(&line(), 0).unwrap();
        let text = format_dijkstra(&result.trace);

        assert_eq!(
            text,
            "Step\tN'\tD(1),p(1)\tD(2),p(2)\n\
             0\t0\t2,0\t∞\n\
             1\t0,1\t\t5,1\n\
             2\t0,1,2\t\t\n"
        );
    }

    #[test]
    fn test_dijkstra_report_disconnected() {
        let result = shortest_paths(&AdjacencyMatrix::new(2), 1).unwrap();
        let text = format_dijkstra(&result.trace);

        assert_eq!(text, "Step\tN'\tD(0),p(0)\n0\t1\t∞\n");
    }

    #[test]
    fn test_distance_vector_report() {
        let m = line();
        let distances = shortest_paths(&m, 0).unwrap().distances;
        let table = distance_vector(&m.to_network(), 100);
        let text = format_distance_vector(&distances, &table);

        assert_eq!(
            text,
            "Vertex \t Distance from Source \n\
             0 \t\t 0\n\
             1 \t\t 2\n\
             2 \t\t 5\n\
             \n\
             Distance Vector Routing Table\n\
             \n \t0\t1\t2\t\n\
             0\t0\t2\t5\t\n\
             1\t2\t0\t3\t\n\
             2\t5\t3\t0\t\n"
        );
    }

    #[test]
    fn test_distance_vector_report_unreachable() {
        let m = AdjacencyMatrix::new(2);
        let distances = shortest_paths(&m, 0).unwrap().distances;
        let table = distance_vector(&m.to_network(), 100);
        let text = format_distance_vector(&distances, &table);

        assert!(text.contains("1 \t\t ∞\n"));
        assert!(text.ends_with("0\t0\t∞\t\n1\t∞\t0\t\n"));
    }
}
