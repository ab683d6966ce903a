mod common;

use common::{Builder, Grad};
use minigrad_core::{backpropagate, topological_sort, Context, MinigradError, NodeId};

#[test]
fn vector_gradients_flow_through_a_diamond() -> Result<(), MinigradError> {
    let b = Builder::default();
    let w = b.leaf();
    let bias = b.leaf();
    let c = b.constant();
    let h = b.op(&[(&w, 2.0), (&c, 9.0)]);
    let left = b.op(&[(&h, 3.0)]);
    let right = b.op(&[(&h, -1.0), (&bias, 1.0)]);
    let out = b.op(&[(&left, 1.0), (&right, 0.5)]);

    backpropagate(&out, Grad(vec![1.0, 2.0]))?;

    // d out / d h = 3 + 0.5 * -1 = 2.5, d h / d w = 2
    assert_eq!(w.grad(), Some(Grad(vec![5.0, 10.0])));
    assert_eq!(bias.grad(), Some(Grad(vec![0.5, 1.0])));
    Ok(())
}

#[test]
fn order_starts_at_root_and_skips_constants() {
    let b = Builder::default();
    let x = b.leaf();
    let c = b.constant();
    let y = b.op(&[(&x, 1.0), (&c, 1.0)]);
    let z = b.op(&[(&y, 1.0), (&x, 1.0)]);

    let order: Vec<NodeId> = topological_sort(&z).iter().map(|n| n.id()).collect();
    assert_eq!(order, vec![z.id(), y.id(), x.id()]);
}

#[test]
fn leaf_root_gets_the_seed() -> Result<(), MinigradError> {
    let b = Builder::default();
    let x = b.leaf();
    backpropagate(&x, Grad(vec![0.25, -4.0]))?;
    assert_eq!(x.grad(), Some(Grad(vec![0.25, -4.0])));
    Ok(())
}

#[test]
fn constant_root_is_a_no_op() -> Result<(), MinigradError> {
    let b = Builder::default();
    let c = b.constant();
    assert!(topological_sort(&c).is_empty());
    backpropagate(&c, Grad(vec![1.0]))?;
    Ok(())
}

#[test]
fn context_keeps_only_the_last_save() {
    let mut ctx = Context::new(false);
    ctx.save(vec![Grad(vec![1.0]), Grad(vec![2.0])]);
    ctx.save(vec![Grad(vec![3.0])]);
    assert_eq!(ctx.saved(), &[Grad(vec![3.0])]);

    let mut frozen = Context::new(true);
    frozen.save(vec![Grad(vec![1.0])]);
    assert!(frozen.saved().is_empty());
}
