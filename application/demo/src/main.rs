use matrix_algebra::*;

fn main() -> Result<(), OutOfRange> {
  let zeros = Matrix::<3, 4>::default();
  println!("3x4 zeros:\n{zeros}\n");

  let block = Matrix::<3, 3, i32>::from_block([[2, 3, 5], [1, 2, 6], [7, 7, 4]]);
  println!("3x3 from block:\n{block}\n");

  let flat = Matrix::<2, 2, i32>::from_flat(&[1, 2, 3, 4])?;
  let nested = Matrix::<2, 2, i32>::from_rows(&[[5, 2], [3, 3]])?;

  println!("trace: {}", nested.trace());
  println!("transpose:\n{}\n", nested.transpose());
  println!("sum:\n{}\n", &flat + &nested);
  println!("difference:\n{}\n", &flat - &nested);
  println!("doubled:\n{}\n", &nested * 2);
  println!("product:\n{}\n", flat * nested);

  let corner = block.resized::<2, 3>();
  println!("top-left 2x3 of the block:\n{corner}");
  Ok(())
}
