use stackvm_core::programs;
use stackvm_core::VM;

fn main() -> anyhow::Result<()> {
    let mut vm = VM::new();

    for (i, demo) in programs::demos().iter().enumerate() {
        println!("Example {}: {}", i + 1, demo.title);
        vm.execute_observed(&demo.instructions, &mut |value: i64| println!("{}", value))?;
        println!("Stack: {:?}", vm.stack());
        println!();
    }

    Ok(())
}
