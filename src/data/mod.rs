pub mod challenges;
