use hrportal_core::models::message::{Delivery, Message};
use hrportal_core::models::wire::QueryRequest;

/// Ordered messages of the live conversation. Entries are only appended,
/// or the whole list replaced when a stored thread is opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationStore {
    messages: Vec<Message>,
}

impl ConversationStore {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Message> {
        self.messages.get_mut(index)
    }

    pub(crate) fn push(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub(crate) fn replace(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    /// Settle the delivery state of a provisional question.
    ///
    /// The entry may be gone if a stored thread replaced the conversation
    /// while the query was in flight; that is not an error.
    pub(crate) fn settle(&mut self, index: usize, question: &str, delivery: Delivery) {
        if let Some(msg) = self.messages.get_mut(index)
            && msg.delivery == Delivery::Pending
            && msg.question == question
        {
            msg.delivery = delivery;
        }
    }
}

/// Ticket for a query whose question has been appended provisionally and
/// whose answer is still outstanding. Returned by
/// [`crate::Controller::begin_query`] and consumed by
/// [`crate::Controller::finish_query`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub(crate) index: usize,
    pub(crate) generation: u64,
    pub request: QueryRequest,
}

impl PendingQuery {
    pub fn question(&self) -> &str {
        &self.request.question
    }
}
