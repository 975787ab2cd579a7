mod practice;

#[cfg(test)]
mod practice_smoke;

pub use practice::PracticeView;
