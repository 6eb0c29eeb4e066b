diesel::table! {
    categories (id) {
        id -> BigInt,
        name -> Text,
        description -> Nullable<Text>,
        user_id -> Nullable<BigInt>,
    }
}

diesel::table! {
    expenses (id) {
        id -> BigInt,
        user_id -> BigInt,
        category_id -> BigInt,
        amount -> Text,
        description -> Nullable<Text>,
        expense_date -> Date,
        payment_mode -> Text,
        created_at -> Timestamp,
        updated_at -> Timestamp,
    }
}

diesel::table! {
    users (id) {
        id -> BigInt,
        name -> Text,
        email -> Text,
        password_hash -> Text,
        role -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(categories -> users (user_id));
diesel::joinable!(expenses -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(categories, expenses, users,);
