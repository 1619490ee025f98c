fn main() -> anyhow::Result<()> {
    study_planner::run()
}
