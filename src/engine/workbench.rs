//! The workbench owns every structure of a visualizer session.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::VisualizerConfig;
use crate::graph::UndirectedGraph;
use crate::hash::BucketHashTable;
use crate::heap::MinMaxHeap;
use crate::list::SinglyLinkedList;
use crate::oplog::{OperationLog, SharedLog};
use crate::tree::AvlTree;
use crate::types::{OpEvent, StructureKind, VizResult};

/// One heap, tree, hash table, graph and list, all reporting into one log.
///
/// The structures stay independent; the workbench only wires their
/// observers. Callers mutate a structure, then read its snapshot back.
pub struct Workbench {
    heap: MinMaxHeap,
    tree: AvlTree,
    table: BucketHashTable<String>,
    graph: UndirectedGraph,
    list: SinglyLinkedList,
    log: SharedLog,
}

impl Workbench {
    /// Build every structure from `config`.
    pub fn from_config(config: &VisualizerConfig) -> VizResult<Self> {
        config.validate()?;
        let log: SharedLog = Rc::new(RefCell::new(OperationLog::with_capacity(
            config.log.capacity,
        )));

        let mut heap = MinMaxHeap::new(config.heap.min_heap);
        heap.set_observer(Box::new(Rc::clone(&log)));
        let mut tree = AvlTree::new();
        tree.set_observer(Box::new(Rc::clone(&log)));
        let mut table: BucketHashTable<String> =
            BucketHashTable::with_buckets(config.hash.bucket_count)?;
        table.set_observer(Box::new(Rc::clone(&log)));
        let mut graph = UndirectedGraph::new(config.graph.vertex_count);
        graph.set_observer(Box::new(Rc::clone(&log)));
        let mut list = SinglyLinkedList::new();
        list.set_observer(Box::new(Rc::clone(&log)));

        log.borrow_mut().record(OpEvent::info(
            StructureKind::Session,
            "Visualizer ready. Use the controls to start.",
        ));

        Ok(Self {
            heap,
            tree,
            table,
            graph,
            list,
            log,
        })
    }

    pub fn heap(&mut self) -> &mut MinMaxHeap {
        &mut self.heap
    }

    pub fn tree(&mut self) -> &mut AvlTree {
        &mut self.tree
    }

    pub fn table(&mut self) -> &mut BucketHashTable<String> {
        &mut self.table
    }

    pub fn graph(&mut self) -> &mut UndirectedGraph {
        &mut self.graph
    }

    pub fn list(&mut self) -> &mut SinglyLinkedList {
        &mut self.list
    }

    /// The shared operation log.
    pub fn log(&self) -> SharedLog {
        Rc::clone(&self.log)
    }

    /// Clear the operation log without touching any structure.
    pub fn clear_log(&mut self) {
        self.log.borrow_mut().clear();
    }
}
