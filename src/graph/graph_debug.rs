use crate::graph::*;

/// Inspects into a graph with customized indentation.
///
/// Every vertex is printed on its own line, followed by one indented line per incident edge.
pub struct GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: QueryableGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.graph.vertices() {
            self.display_indent(f, 0)?;
            writeln!(f, "{}", v)?;
            let edges = self.graph.out_edges(v).map_err(|_| std::fmt::Error)?;
            for e in edges {
                let w = e.opposite(v).ok_or(std::fmt::Error)?;
                self.display_indent(f, 1)?;
                writeln!(f, "-- {}", w)?;
            }
        }
        Ok(())
    }
}
