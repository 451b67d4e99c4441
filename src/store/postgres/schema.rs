//! Diesel schema for the todo tracker relations.

diesel::table! {
    /// Users that can be put in charge of todos.
    users (user_id) {
        /// Store-assigned user identifier.
        user_id -> Int4,
        /// User name, the lookup key of todo writes.
        #[max_length = 255]
        name -> Varchar,
    }
}

diesel::table! {
    /// Status vocabulary.
    statuses (status_id) {
        /// Integer status code.
        status_id -> Int4,
        /// Status text.
        #[max_length = 50]
        status_txt -> Varchar,
    }
}

diesel::table! {
    /// Todo records referencing a user and a status.
    todos (id) {
        /// Store-assigned todo identifier.
        id -> Int8,
        /// Todo title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Calendar due date.
        due_date -> Date,
        /// Foreign key to `users.user_id`.
        person_in_charge -> Int4,
        /// Foreign key to `statuses.status_id`.
        status -> Int4,
    }
}

diesel::joinable!(todos -> users (person_in_charge));
diesel::joinable!(todos -> statuses (status));

diesel::allow_tables_to_appear_in_same_query!(todos, users, statuses);
