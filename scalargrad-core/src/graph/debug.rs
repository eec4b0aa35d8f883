// src/graph/debug.rs
use crate::graph::Graph;
use crate::scalar::Scalar;
use std::fmt;

/// One line per node: id, operation, operands and `[data=.., grad=..]`.
impl<T: Scalar> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph({} nodes)", self.nodes.len())?;
        for (index, node) in self.nodes.iter().enumerate() {
            write!(f, "  #{} {:<8}", index, node.op.name())?;
            let operands = node.operands();
            if !operands.is_empty() {
                let listed: Vec<String> = operands.iter().map(|id| id.to_string()).collect();
                write!(f, " ({})", listed.join(", "))?;
            }
            writeln!(f, " {}", node)?;
        }
        Ok(())
    }
}
