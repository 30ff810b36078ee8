pub mod copilot;
pub mod git;
pub mod process;

#[cfg(test)]
pub mod testing;
