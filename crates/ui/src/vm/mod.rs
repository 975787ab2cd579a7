mod auto_advance;
mod quiz_vm;

pub use auto_advance::{AdvanceTicket, AutoAdvance};
pub use quiz_vm::{
    FeedbackVm, OptionVm, QuestionVm, QuizVm, ScreenVm, filter_info, practice_mode_label,
    type_filter_label,
};
