use epp_scheduling::PickerRegistry;

pub fn run() -> anyhow::Result<()> {
    for name in PickerRegistry::with_defaults().names() {
        println!("{name}");
    }
    Ok(())
}
