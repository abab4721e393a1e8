mod property {
    mod expression;
    mod reference;
}
