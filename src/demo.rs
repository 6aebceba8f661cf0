//! Scripted walkthroughs of the catalog, one per structure, as printed by the
//! `demo` command.

use clap::ValueEnum;

use crate::{
    errors::Result,
    graph::Graph,
    hashing::HashTable,
    linear::{CircularQueue, Deque, LinkedList, Queue, Stack},
    patterns::{
        behavioral::{chain_of_responsibility, interpreter, observer},
        creational::builder::{ComputerBuilder, Director, GamingComputerBuilder},
        structural::{
            decorator::{self, Text},
            proxy::{Proxy, Subject},
        },
    },
    skip_list::{SkipList, SkipListParams},
    trees::{AvlTree, BinarySearchTree, BinaryTree, Heap},
    trie::Trie,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Structure {
    Stack,
    Queue,
    Deque,
    CircularQueue,
    LinkedList,
    BinaryTree,
    Bst,
    Avl,
    Heap,
    HashTable,
    Graph,
    Trie,
    SkipList,
    Patterns,
}

impl Structure {
    /// Runs the walkthrough and returns its transcript, one line per step.
    pub fn walkthrough(self) -> Result<Vec<String>> {
        match self {
            Structure::Stack => stack(),
            Structure::Queue => queue(),
            Structure::Deque => deque(),
            Structure::CircularQueue => circular_queue(),
            Structure::LinkedList => linked_list(),
            Structure::BinaryTree => Ok(binary_tree()),
            Structure::Bst => bst(),
            Structure::Avl => avl(),
            Structure::Heap => heap(),
            Structure::HashTable => Ok(hash_table()),
            Structure::Graph => Ok(graph()),
            Structure::Trie => Ok(trie()),
            Structure::SkipList => Ok(skip_list()),
            Structure::Patterns => Ok(patterns()),
        }
    }
}

fn stack() -> Result<Vec<String>> {
    let mut stack = Stack::new();
    for value in 1..=3 {
        stack.push(value);
    }
    let mut out = vec![format!("pushed 1, 2, 3; top is {}", stack.peek()?)];
    out.push(format!("popped {}", stack.pop()?));
    out.push(format!("size {}", stack.len()));
    Ok(out)
}

fn queue() -> Result<Vec<String>> {
    let mut queue = Queue::new();
    for value in ["a", "b", "c"] {
        queue.enqueue(value);
    }
    let mut out = vec![format!("front is {}", queue.peek()?)];
    out.push(format!("dequeued {}", queue.dequeue()?));
    out.push(format!("remaining {:?}", queue.iter().collect::<Vec<_>>()));
    Ok(out)
}

fn deque() -> Result<Vec<String>> {
    let mut deque = Deque::new();
    deque.add_rear(2);
    deque.add_front(1);
    deque.add_rear(3);
    let mut out = vec![format!("contents {:?}", deque.to_vec())];
    out.push(format!("removed front {}", deque.remove_front()?));
    out.push(format!("removed rear {}", deque.remove_rear()?));
    out.push(format!("contents {:?}", deque.to_vec()));
    Ok(out)
}

fn circular_queue() -> Result<Vec<String>> {
    let mut queue: CircularQueue<i32, 3> = CircularQueue::new();
    let mut out = Vec::new();
    for value in 1..=4 {
        if let Some(evicted) = queue.enqueue(value) {
            out.push(format!("enqueued {value}, overwrote {evicted}"));
        }
    }
    out.push(format!("contents {:?}", queue.to_vec()));
    out.push(format!("dequeued {}", queue.dequeue()?));
    Ok(out)
}

fn linked_list() -> Result<Vec<String>> {
    let mut list: LinkedList<i32> = [10, 20, 40].into_iter().collect();
    list.insert_at_position(30, 2)?;
    list.insert_at_beginning(5);
    let mut out = vec![list.to_string()];
    out.push(format!("deleted {} at position 1", list.delete_at_position(1)?));
    out.push(format!("30 found at {:?}", list.search(&30)));
    out.push(list.to_string());
    Ok(out)
}

fn binary_tree() -> Vec<String> {
    let tree: BinaryTree<i32> = (1..=7).collect();
    vec![
        format!("level order {:?}", tree.level_order()),
        format!("inorder {:?}", tree.inorder()),
        format!("height {}", tree.height()),
    ]
}

fn bst() -> Result<Vec<String>> {
    let mut tree: BinarySearchTree<i32> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    let mut out = vec![format!("inorder {:?}", tree.inorder())];
    out.push(format!("min {} max {}", tree.min()?, tree.max()?));
    let removed = tree.delete(&30);
    out.push(format!("deleted 30: {removed}, now {:?}", tree.inorder()));
    let removed = tree.delete(&45);
    out.push(format!("deleted 45: {removed}"));
    Ok(out)
}

fn avl() -> Result<Vec<String>> {
    let mut tree = AvlTree::new();
    for value in [10, 20, 30, 40, 50, 25] {
        tree.insert(value);
    }
    let mut out = vec![format!("preorder {:?}", tree.preorder())];
    out.push(format!("height {} balanced {}", tree.height(), tree.is_balanced()));
    tree.delete(&40);
    out.push(format!("after deleting 40 {:?}, min {}", tree.preorder(), tree.min()?));
    Ok(out)
}

fn heap() -> Result<Vec<String>> {
    let mut heap = Heap::min_heap();
    heap.heapify([5, 3, 8, 1, 9, 2]);
    let mut out = vec![format!("array {:?}", heap.as_slice())];
    out.push(format!("deleted root {}", heap.delete()?));
    out.push(format!("drained {:?}", heap.into_sorted_vec()));
    Ok(out)
}

fn hash_table() -> Vec<String> {
    let mut table = HashTable::new();
    let mut out = Vec::new();
    for (i, key) in ["apple", "banana", "cherry", "date", "elderberry", "fig", "grape", "kiwi", "lemon"]
        .into_iter()
        .enumerate()
    {
        table.insert(key, i);
    }
    out.push(format!("{} entries in {} buckets", table.len(), table.bucket_count()));
    out.push(format!("banana -> {:?}", table.get("banana")));
    out.push(format!("removed cherry -> {:?}", table.remove("cherry")));
    out
}

fn graph() -> Vec<String> {
    let mut graph: Graph<u32> = Graph::undirected();
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 1), (2, 4)] {
        graph.add_edge(a, b, 1);
    }
    graph.add_vertex(5);
    vec![
        format!("bfs from 1 {:?}", graph.bfs(&1)),
        format!("dfs from 1 {:?}", graph.dfs(&1)),
        format!("components {:?}", graph.connected_components()),
    ]
}

fn trie() -> Vec<String> {
    let mut trie: Trie = ["hello", "help", "hell", "world"].into_iter().collect();
    let mut out = vec![format!("words with 'hel' {:?}", trie.words_with_prefix("hel"))];
    trie.delete("help");
    out.push(format!("after deleting help {:?}", trie.words()));
    out
}

fn skip_list() -> Vec<String> {
    let mut list = SkipList::with_params(SkipListParams::seeded(42));
    list.extend([3, 6, 7, 9, 12, 19, 17, 26, 21, 25]);
    let mut out: Vec<String> = list.to_string().lines().map(str::to_string).collect();
    out.push(format!("range 7..=19 {:?}", list.range(&7, &19)));
    out
}

fn patterns() -> Vec<String> {
    let mut builder = GamingComputerBuilder::default();
    Director.build_full(&mut builder);

    let chain = chain_of_responsibility::chain(&["A", "B", "C"]);
    let mut proxy = Proxy::new(true);

    let mut out = vec![
        builder.get_result().list_parts(),
        format!("{:?}", chain.handle("B")),
        format!("{:?}", chain.handle("Z")),
        decorator::decorate("decorated", &["bold", "bracket"]).render(),
        proxy.request(),
        format!(
            "John is male: {}",
            interpreter::male_expression().interpret("John")
        ),
    ];

    let mut subject = observer::Subject::new();
    let recorder = std::rc::Rc::new(observer::RecordingObserver::new("demo"));
    subject.subscribe(recorder.clone());
    subject.set_message("hello observers");
    out.extend(recorder.received());
    out
}
