pub mod suggest_recipes;
