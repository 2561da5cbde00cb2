mod unstable {
    mod quicksort {
        sort_test_tools::instantiate_sort_tests!(classic_sort::unstable::quicksort::SortImpl);
    }

    mod dual_pivot_quicksort {
        sort_test_tools::instantiate_sort_tests!(classic_sort::unstable::dual_pivot_quicksort::SortImpl);
    }

    mod quicksort_3way {
        sort_test_tools::instantiate_sort_tests!(classic_sort::unstable::quicksort_3way::SortImpl);
    }
}

mod stable {
    mod mergesort {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::mergesort::SortImpl);
    }

    mod mergesort_bottom_up {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::mergesort_bottom_up::SortImpl);
    }

    mod mergesort_in_place {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::mergesort_in_place::SortImpl);
    }

    mod mergesort_insertion {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::mergesort_insertion::SortImpl);
    }

    mod mergesort_weave {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::mergesort_weave::SortImpl);
    }

    mod mergesort_3way {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::mergesort_3way::SortImpl);
    }

    mod stable_quicksort {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::stable_quicksort::SortImpl);
    }

    mod timsort {
        sort_test_tools::instantiate_sort_tests!(classic_sort::stable::timsort::SortImpl);
    }
}
