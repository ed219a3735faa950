use crate::{
    core::DismissTicket,
    gui::components::{ComponentMessage, DashboardScreen},
};

#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(ComponentMessage<DashboardScreen>),
    ToastExpired(DismissTicket),
}
