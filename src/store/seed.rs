use super::{
    ids::IdGenerator,
    memory::TodoCollection,
    models::{Todo, TodoList},
};

fn todo(id: i32, title: &str, done: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        done,
    }
}

/// Lists a fresh session starts with.
pub(crate) fn seed_collection() -> TodoCollection {
    let lists = vec![
        TodoList {
            id: 1,
            title: "Work Todos".to_string(),
            todos: vec![
                todo(2, "Get coffee", true),
                todo(3, "Chat with co-workers", true),
                todo(4, "Duck out of meeting", false),
            ],
        },
        TodoList {
            id: 5,
            title: "Home Todos".to_string(),
            todos: vec![
                todo(6, "Feed the cats", true),
                todo(7, "Go to bed", true),
                todo(8, "Buy milk", true),
                todo(9, "Water the plants", true),
            ],
        },
        TodoList {
            id: 10,
            title: "Additional Todos".to_string(),
            todos: Vec::new(),
        },
        TodoList {
            id: 11,
            title: "social todos".to_string(),
            todos: vec![todo(12, "RSVP to the birthday party", false)],
        },
    ];

    let ids = IdGenerator::after(
        lists
            .iter()
            .flat_map(|list| std::iter::once(list.id).chain(list.todos.iter().map(|t| t.id))),
    );
    TodoCollection { lists, ids }
}
