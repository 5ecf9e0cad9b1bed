//! Singly linked list with head insertion.

pub mod linked_list;

pub use linked_list::SinglyLinkedList;
