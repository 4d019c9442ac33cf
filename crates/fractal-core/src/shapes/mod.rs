/// Recursive fractal generators.
///
/// One module per seed variant (Sierpinski triangle, Lévy C-curve, branching
/// tree) and a dispatcher that selects among them.
pub mod sierpinski;
pub mod levy;
pub mod tree;
pub mod dispatcher;
