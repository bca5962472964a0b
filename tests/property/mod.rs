mod help_layout;
