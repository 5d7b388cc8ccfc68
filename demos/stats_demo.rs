use chain_hash::ChainedHashTable;
use chain_hash::Error;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "initial_capacity", default_value_t = 16)]
    initial_capacity: usize,

    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: usize,
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Creating ChainedHashTable with initial capacity: {}",
        args.initial_capacity
    );

    let mut table: ChainedHashTable<u64, u64> =
        ChainedHashTable::with_capacity(args.initial_capacity)?;

    println!("Filling table with {} u64 values...", args.entries);

    let mut growths = 0;
    let mut capacity = table.capacity();
    for i in 0..args.entries as u64 {
        table.insert(i, i * 2)?;
        if table.capacity() != capacity {
            growths += 1;
            capacity = table.capacity();
        }
    }

    let mut duplicates = 0;
    for i in (0..args.entries as u64).step_by(7) {
        if let Err(Error::DuplicateKey) = table.insert(i, 0) {
            duplicates += 1;
        }
    }

    println!("Inserted {} values into table", table.len());
    println!(
        "Final capacity: {} after {} growths ({:.2}% load factor)",
        table.capacity(),
        growths,
        table.load_factor() * 100.0
    );
    println!("Rejected {} duplicate inserts", duplicates);

    table.print_chain_histogram();
    table.chain_stats().print();

    Ok(())
}
